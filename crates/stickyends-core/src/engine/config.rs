use crate::core::energetics::params::REFERENCE_TEMPERATURE_C;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const TEMPERATURE_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Unsupported option: {0}")]
    UnsupportedOption(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

/// How registers with mismatched pair-steps are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchModel {
    /// A mismatch terminates the duplex, leaving dangles on either side.
    #[default]
    Dangle,
    /// A mismatch is an internal loop. Not available yet.
    Loop,
    /// The more stable of the dangle and loop estimates. Not available yet.
    Max,
}

impl MismatchModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MismatchModel::Dangle => "dangle",
            MismatchModel::Loop => "loop",
            MismatchModel::Max => "max",
        }
    }
}

impl fmt::Display for MismatchModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MismatchModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dangle" => Ok(MismatchModel::Dangle),
            "loop" => Ok(MismatchModel::Loop),
            "max" => Ok(MismatchModel::Max),
            _ => Err(ConfigError::UnsupportedOption(format!(
                "mismatch model '{}' (expected 'dangle', 'loop' or 'max')",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergeticsConfig {
    pub temperature_c: f64,
    pub mismatch_model: MismatchModel,
    pub coaxial_stacking: bool,
}

impl Default for EnergeticsConfig {
    fn default() -> Self {
        Self {
            temperature_c: REFERENCE_TEMPERATURE_C,
            mismatch_model: MismatchModel::Dangle,
            coaxial_stacking: false,
        }
    }
}

#[derive(Default)]
pub struct EnergeticsConfigBuilder {
    temperature_c: Option<f64>,
    mismatch_model: Option<MismatchModel>,
    coaxial_stacking: Option<bool>,
}

impl EnergeticsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature_c(mut self, temperature: f64) -> Self {
        self.temperature_c = Some(temperature);
        self
    }
    pub fn mismatch_model(mut self, model: MismatchModel) -> Self {
        self.mismatch_model = Some(model);
        self
    }
    pub fn coaxial_stacking(mut self, enabled: bool) -> Self {
        self.coaxial_stacking = Some(enabled);
        self
    }

    pub fn build(self) -> Result<EnergeticsConfig, ConfigError> {
        let defaults = EnergeticsConfig::default();
        let temperature_c = self.temperature_c.unwrap_or(defaults.temperature_c);
        if !((temperature_c - REFERENCE_TEMPERATURE_C).abs() < TEMPERATURE_TOLERANCE) {
            return Err(ConfigError::NotImplemented(format!(
                "temperature adjustment ({} °C requested, only {} °C is supported)",
                temperature_c, REFERENCE_TEMPERATURE_C
            )));
        }
        Ok(EnergeticsConfig {
            temperature_c,
            mismatch_model: self.mismatch_model.unwrap_or(defaults.mismatch_model),
            coaxial_stacking: self.coaxial_stacking.unwrap_or(defaults.coaxial_stacking),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_reference_temperature_dangle_without_coax() {
        let config = EnergeticsConfigBuilder::new().build().unwrap();
        assert_eq!(config, EnergeticsConfig::default());
        assert_eq!(config.temperature_c, 37.0);
        assert_eq!(config.mismatch_model, MismatchModel::Dangle);
        assert!(!config.coaxial_stacking);
    }

    #[test]
    fn builder_applies_every_setter() {
        let config = EnergeticsConfigBuilder::new()
            .temperature_c(37.0)
            .mismatch_model(MismatchModel::Loop)
            .coaxial_stacking(true)
            .build()
            .unwrap();
        assert_eq!(config.mismatch_model, MismatchModel::Loop);
        assert!(config.coaxial_stacking);
    }

    #[test]
    fn build_rejects_other_temperatures_as_not_implemented() {
        for temperature in [40.0, 25.0, f64::NAN] {
            let result = EnergeticsConfigBuilder::new()
                .temperature_c(temperature)
                .build();
            assert!(matches!(result, Err(ConfigError::NotImplemented(_))));
        }
    }

    #[test]
    fn mismatch_model_parses_case_insensitively() {
        assert_eq!("dangle".parse::<MismatchModel>(), Ok(MismatchModel::Dangle));
        assert_eq!("LOOP".parse::<MismatchModel>(), Ok(MismatchModel::Loop));
        assert_eq!(" Max ".parse::<MismatchModel>(), Ok(MismatchModel::Max));
    }

    #[test]
    fn unknown_mismatch_model_is_an_unsupported_option() {
        let result = "nearest".parse::<MismatchModel>();
        assert!(matches!(result, Err(ConfigError::UnsupportedOption(_))));
    }

    #[test]
    fn mismatch_model_display_round_trips_through_from_str() {
        for model in [MismatchModel::Dangle, MismatchModel::Loop, MismatchModel::Max] {
            assert_eq!(model.to_string().parse::<MismatchModel>(), Ok(model));
        }
    }

    #[test]
    fn mismatch_model_deserializes_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            model: MismatchModel,
        }
        let parsed: Wrapper = toml::from_str("model = \"max\"").unwrap();
        assert_eq!(parsed.model, MismatchModel::Max);
        assert!(toml::from_str::<Wrapper>("model = \"Dangle\"").is_err());
    }
}
