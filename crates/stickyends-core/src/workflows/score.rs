use crate::core::models::ends::{EndArray, EndType};
use crate::engine::energetics::Energetics;
use crate::engine::error::EnergeticsError;
use tracing::{info, instrument};

/// The energy of one scored pair, with the sequences as given.
#[derive(Debug, Clone, PartialEq)]
pub struct PairScore {
    pub seq1: String,
    pub seq2: String,
    pub energy: f64,
}

fn split_pairs(pairs: &[(String, String)]) -> (Vec<&str>, Vec<&str>) {
    pairs.iter().map(|(a, b)| (a.as_str(), b.as_str())).unzip()
}

fn label(pairs: &[(String, String)], energies: Vec<f64>) -> Vec<PairScore> {
    pairs
        .iter()
        .zip(energies)
        .map(|((seq1, seq2), energy)| PairScore {
            seq1: seq1.clone(),
            seq2: seq2.clone(),
            energy,
        })
        .collect()
}

/// Scores each `(seq1, seq2)` pair with the configured mismatch model.
#[instrument(skip_all, name = "mismatch_workflow")]
pub fn score_pairs(
    energetics: &Energetics,
    end_type: EndType,
    pairs: &[(String, String)],
) -> Result<Vec<PairScore>, EnergeticsError> {
    info!(pairs = pairs.len(), %end_type, "Scoring sticky-end pairs.");
    let (left, right) = split_pairs(pairs);
    let seqs1 = EndArray::from_strs(end_type, &left)?;
    let seqs2 = EndArray::from_strs(end_type, &right)?;
    let energies = energetics.uniform(&seqs1, &seqs2)?;
    Ok(label(pairs, energies))
}

/// Scores one end against every target.
#[instrument(skip_all, name = "against_workflow")]
pub fn score_against(
    energetics: &Energetics,
    end_type: EndType,
    query: &str,
    targets: &[String],
) -> Result<Vec<PairScore>, EnergeticsError> {
    info!(targets = targets.len(), %end_type, "Scoring one end against a batch.");
    let seqs1 = EndArray::single(end_type, query)?;
    let seqs2 = EndArray::from_strs(end_type, targets)?;
    let energies = energetics.uniform(&seqs1, &seqs2)?;
    Ok(targets
        .iter()
        .zip(energies)
        .map(|(target, energy)| PairScore {
            seq1: query.to_string(),
            seq2: target.clone(),
            energy,
        })
        .collect())
}

/// Scores fully complementary pairs as joined duplexes.
#[instrument(skip_all, name = "matched_workflow")]
pub fn score_matched(
    energetics: &Energetics,
    end_type: EndType,
    pairs: &[(String, String)],
) -> Result<Vec<PairScore>, EnergeticsError> {
    info!(pairs = pairs.len(), %end_type, "Scoring matched duplexes.");
    let (left, right) = split_pairs(pairs);
    let seqs1 = EndArray::from_strs(end_type, &left)?;
    let seqs2 = EndArray::from_strs(end_type, &right)?;
    let duplex = seqs1.duplex_with(&seqs2)?;
    Ok(label(pairs, energetics.matching_uniform(&duplex)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::error::SequenceError;
    use crate::engine::config::EnergeticsConfig;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn score_pairs_labels_each_energy_with_its_input() {
        let e = Energetics::new(EnergeticsConfig::default());
        let reports = score_pairs(
            &e,
            EndType::DT,
            &pairs(&[("gatcc", "aggat"), ("GATCC", "agcat")]),
        )
        .unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].seq1, "GATCC");
        assert_eq!(reports[1].seq2, "agcat");
        assert!(f64_approx_equal(reports[0].energy, 3.71));
        assert!(f64_approx_equal(reports[1].energy, -0.69));
    }

    #[test]
    fn score_against_broadcasts_the_query() {
        let e = Energetics::new(EnergeticsConfig::default());
        let targets = vec!["atcca".to_string(), "ggatt".to_string()];
        let reports = score_against(&e, EndType::TD, "ggatt", &targets).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.seq1 == "ggatt"));
        assert!(f64_approx_equal(reports[0].energy, 3.99));
    }

    #[test]
    fn score_matched_agrees_with_mismatch_scoring_of_complementary_pairs() {
        let e = Energetics::new(EnergeticsConfig::default());
        let input = pairs(&[("gatcc", "aggat")]);
        let matched = score_matched(&e, EndType::DT, &input).unwrap();
        let mismatch = score_pairs(&e, EndType::DT, &input).unwrap();
        assert!(f64_approx_equal(matched[0].energy, mismatch[0].energy));
    }

    #[test]
    fn score_matched_rejects_non_complementary_pairs() {
        let e = Energetics::new(EnergeticsConfig::default());
        let err = score_matched(&e, EndType::DT, &pairs(&[("gatcc", "agcat")])).unwrap_err();
        assert!(matches!(
            err,
            EnergeticsError::Sequence {
                source: SequenceError::NotComplementary { index: 0 }
            }
        ));
    }

    #[test]
    fn invalid_characters_are_reported_with_their_position() {
        let e = Energetics::new(EnergeticsConfig::default());
        let err = score_pairs(&e, EndType::DT, &pairs(&[("gatxc", "aggat")])).unwrap_err();
        assert!(matches!(
            err,
            EnergeticsError::Sequence {
                source: SequenceError::InvalidBase {
                    position: 3,
                    found: 'x'
                }
            }
        ));
    }
}
