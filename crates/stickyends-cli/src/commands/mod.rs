pub mod matched;
pub mod mismatch;

use crate::cli::{EnergeticsArgs, PairInput};
use crate::config::PartialScoringConfig;
use crate::error::{CliError, Result};
use crate::utils::parser;
use std::io::Write;
use std::path::Path;
use stickyends::core::energetics::params::ParameterSet;
use stickyends::engine::energetics::Energetics;
use stickyends::engine::error::EnergeticsError;
use stickyends::workflows::score::PairScore;
use tracing::info;

fn build_energetics(args: &EnergeticsArgs) -> Result<Energetics> {
    let partial_config = PartialScoringConfig::load(args)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(args)?;
    info!(
        model = %config.energetics.mismatch_model,
        coaxial_stacking = config.energetics.coaxial_stacking,
        "Energetics configured."
    );

    let mut energetics = Energetics::new(config.energetics);
    if let Some(path) = &config.parameters {
        info!("Loading nearest-neighbor parameters from {:?}", path);
        let params = ParameterSet::load(path).map_err(EnergeticsError::from)?;
        energetics = energetics.with_params(params);
    }
    Ok(energetics)
}

fn read_input(path: &Path) -> Result<String> {
    info!("Reading sequences from {:?}", path);
    Ok(std::fs::read_to_string(path)?)
}

fn collect_pairs(input: &PairInput) -> Result<Vec<(String, String)>> {
    let mut pairs = input
        .pairs
        .iter()
        .map(|p| parser::parse_pair(p).map_err(CliError::from))
        .collect::<Result<Vec<_>>>()?;

    if let Some(path) = &input.input {
        let content = read_input(path)?;
        let from_file =
            parser::parse_pair_lines(&content).map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })?;
        pairs.extend(from_file);
    }

    if pairs.is_empty() {
        return Err(CliError::NoPairs);
    }
    Ok(pairs)
}

/// Writes one `seq1<TAB>seq2<TAB>energy` line per score.
fn write_scores<W: Write>(out: &mut W, scores: &[PairScore]) -> std::io::Result<()> {
    for score in scores {
        writeln!(out, "{}\t{}\t{:.4}", score.seq1, score.seq2, score.energy)?;
    }
    out.flush()
}

fn print_scores(scores: &[PairScore]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_scores(&mut handle, scores)?;
    Ok(())
}
