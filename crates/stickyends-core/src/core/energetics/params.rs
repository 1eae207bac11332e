use crate::core::models::base::PAIR_STEP_COUNT;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// A nearest-neighbor table indexed by pair-step.
pub type Table = [f64; PAIR_STEP_COUNT];

pub const REFERENCE_TEMPERATURE_C: f64 = 37.0;
pub const REFERENCE_TEMPERATURE_K: f64 = 310.15;

// Zhang 2009, supplementary information.
const COAX_ENTROPY_PER_DG: f64 = 0.0027 / 0.163;

/// Measured values as they appear in the literature or in a parameter file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawParameters {
    pub nn_dg: Table,
    pub nn_ds: Table,
    pub coax_dg: Table,
    pub dangle5_dg: Table,
    pub dangle5_dh: Table,
    pub dangle3_dg: Table,
    pub dangle3_dh: Table,
    pub init_dg: f64,
    pub init_ds: f64,
    pub tail_dg: f64,
}

/// Free energies (kcal/mol at 37 °C) and entropies (kcal/mol/K) used by the
/// scorers, together with the tables derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    pub nn_dg: Table,
    pub nn_ds: Table,
    pub coax_dg: Table,
    pub coax_ds: Table,
    /// Coaxial stacking minus plain stacking, added on top of the NN term.
    pub coax_ddg: Table,
    pub coax_dds: Table,
    pub dangle5_dg: Table,
    pub dangle5_dh: Table,
    pub dangle5_ds: Table,
    pub dangle3_dg: Table,
    pub dangle3_dh: Table,
    pub dangle3_ds: Table,
    pub init_dg: f64,
    pub init_ds: f64,
    pub tail_dg: f64,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

const fn difference(a: &Table, b: &Table) -> Table {
    let mut out = [0.0; PAIR_STEP_COUNT];
    let mut i = 0;
    while i < PAIR_STEP_COUNT {
        out[i] = a[i] - b[i];
        i += 1;
    }
    out
}

const fn scaled(a: &Table, factor: f64) -> Table {
    let mut out = [0.0; PAIR_STEP_COUNT];
    let mut i = 0;
    while i < PAIR_STEP_COUNT {
        out[i] = a[i] * factor;
        i += 1;
    }
    out
}

const fn entropy_from(dh: &Table, dg: &Table) -> Table {
    scaled(&difference(dh, dg), 1.0 / REFERENCE_TEMPERATURE_K)
}

impl ParameterSet {
    pub const fn from_raw(raw: RawParameters) -> Self {
        let coax_ds = scaled(&raw.coax_dg, COAX_ENTROPY_PER_DG);
        Self {
            coax_ddg: difference(&raw.coax_dg, &raw.nn_dg),
            coax_dds: difference(&coax_ds, &raw.nn_ds),
            dangle5_ds: entropy_from(&raw.dangle5_dh, &raw.dangle5_dg),
            dangle3_ds: entropy_from(&raw.dangle3_dh, &raw.dangle3_dg),
            nn_dg: raw.nn_dg,
            nn_ds: raw.nn_ds,
            coax_dg: raw.coax_dg,
            coax_ds,
            dangle5_dg: raw.dangle5_dg,
            dangle5_dh: raw.dangle5_dh,
            dangle3_dg: raw.dangle3_dg,
            dangle3_dh: raw.dangle3_dh,
            init_dg: raw.init_dg,
            init_ds: raw.init_ds,
            tail_dg: raw.tail_dg,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let raw: RawParameters = toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(Self::from_raw(raw))
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        SANTALUCIA_2004
    }
}

/// SantaLucia & Hicks 2004 stacking and dangles, Zhang 2009 coaxial stacking.
pub const SANTALUCIA_2004: ParameterSet = ParameterSet::from_raw(RawParameters {
    nn_dg: [
        -1.00, -1.44, -1.28, -0.88, //
        -1.45, -1.84, -2.17, -1.28, //
        -1.30, -2.24, -1.84, -1.44, //
        -0.58, -1.30, -1.45, -1.00,
    ],
    nn_ds: [
        -0.0213, -0.0224, -0.0210, -0.0204, //
        -0.0227, -0.0199, -0.0272, -0.0210, //
        -0.0222, -0.0244, -0.0199, -0.0224, //
        -0.0213, -0.0222, -0.0227, -0.0213,
    ],
    coax_dg: [
        -1.04, -2.04, -1.29, -1.27, //
        -0.78, -1.97, -1.44, -1.29, //
        -1.66, -2.70, -1.97, -2.04, //
        -0.12, -1.66, -0.78, -1.04,
    ],
    dangle5_dg: [
        -0.51, -0.96, -0.58, -0.50, //
        -0.42, -0.52, -0.34, -0.02, //
        -0.62, -0.72, -0.56, 0.48, //
        -0.71, -0.58, -0.61, -0.10,
    ],
    dangle5_dh: [
        0.2, -6.3, -3.7, -2.9, //
        0.6, -4.4, -4.0, -4.1, //
        -1.1, -5.1, -3.9, -4.2, //
        -6.9, -4.0, -4.9, -0.2,
    ],
    dangle3_dg: [
        -0.12, 0.28, -0.01, 0.13, //
        -0.82, -0.31, -0.01, -0.52, //
        -0.92, -0.23, -0.44, -0.35, //
        -0.48, -0.19, -0.50, -0.29,
    ],
    dangle3_dh: [
        -0.5, 4.7, -4.1, -3.8, //
        -5.9, -2.6, -3.2, -5.2, //
        -2.1, -0.2, -3.9, -4.4, //
        -0.7, 4.4, -1.6, 2.9,
    ],
    init_dg: 1.96,
    init_ds: 0.0057,
    tail_dg: 0.8,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::base::{pair_step, reverse_pair_step, A, C, G, T};
    use std::fs;
    use tempfile::tempdir;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn coax_correction_is_coax_minus_plain_stacking() {
        let p = ParameterSet::default();
        for i in 0..PAIR_STEP_COUNT {
            assert!(f64_approx_equal(p.coax_ddg[i], p.coax_dg[i] - p.nn_dg[i]));
            assert!(f64_approx_equal(p.coax_dds[i], p.coax_ds[i] - p.nn_ds[i]));
        }
        assert!(f64_approx_equal(p.coax_ddg[pair_step(A, A) as usize], -0.04));
    }

    #[test]
    fn coax_entropy_scales_with_coax_free_energy() {
        let p = ParameterSet::default();
        assert!(f64_approx_equal(p.coax_ds[9], -2.70 * 0.0027 / 0.163));
    }

    #[test]
    fn dangle_entropy_is_derived_at_reference_temperature() {
        let p = ParameterSet::default();
        assert!(f64_approx_equal(p.dangle5_ds[0], (0.2 + 0.51) / 310.15));
        assert!(f64_approx_equal(
            p.dangle3_ds[pair_step(C, A) as usize],
            (-5.9 + 0.82) / 310.15
        ));
    }

    #[test]
    fn stacking_table_is_symmetric_under_strand_exchange() {
        let p = ParameterSet::default();
        for step in 0..PAIR_STEP_COUNT as u8 {
            let mirrored = reverse_pair_step(step) as usize;
            assert_eq!(p.nn_dg[step as usize], p.nn_dg[mirrored]);
            assert_eq!(p.coax_dg[step as usize], p.coax_dg[mirrored]);
        }
    }

    #[test]
    fn default_scalars_match_published_values() {
        let p = ParameterSet::default();
        assert_eq!(p.init_dg, 1.96);
        assert_eq!(p.init_ds, 0.0057);
        assert_eq!(p.tail_dg, 0.8);
        assert_eq!(p.nn_dg[pair_step(G, C) as usize], -2.24);
        assert_eq!(p.nn_dg[pair_step(T, A) as usize], -0.58);
    }

    fn write_default_toml(path: &Path, init_dg: f64) {
        let p = SANTALUCIA_2004;
        let table = |t: &Table| {
            let items: Vec<String> = t.iter().map(|v| format!("{:?}", v)).collect();
            format!("[{}]", items.join(", "))
        };
        let content = format!(
            "nn_dg = {}\nnn_ds = {}\ncoax_dg = {}\ndangle5_dg = {}\ndangle5_dh = {}\n\
             dangle3_dg = {}\ndangle3_dh = {}\ninit_dg = {:?}\ninit_ds = {:?}\ntail_dg = {:?}\n",
            table(&p.nn_dg),
            table(&p.nn_ds),
            table(&p.coax_dg),
            table(&p.dangle5_dg),
            table(&p.dangle5_dh),
            table(&p.dangle3_dg),
            table(&p.dangle3_dh),
            init_dg,
            p.init_ds,
            p.tail_dg,
        );
        fs::write(path, content).unwrap();
    }

    #[test]
    fn load_succeeds_with_valid_toml_and_derives_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("params.toml");
        write_default_toml(&path, 2.5);

        let params = ParameterSet::load(&path).unwrap();
        assert_eq!(params.init_dg, 2.5);
        assert_eq!(params.nn_dg, SANTALUCIA_2004.nn_dg);
        assert_eq!(params.coax_ddg, SANTALUCIA_2004.coax_ddg);
        assert_eq!(params.dangle3_ds, SANTALUCIA_2004.dangle3_ds);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ParameterSet::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_table_of_wrong_length() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.toml");
        write_default_toml(&path, 1.96);
        let content = fs::read_to_string(&path)
            .unwrap()
            .replacen("nn_dg = [-1.0, ", "nn_dg = [", 1);
        fs::write(&path, content).unwrap();

        let result = ParameterSet::load(&path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_for_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extra.toml");
        write_default_toml(&path, 1.96);
        let mut content = fs::read_to_string(&path).unwrap();
        content.push_str("salt_correction = 1.0\n");
        fs::write(&path, content).unwrap();

        let result = ParameterSet::load(&path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }
}
