pub mod defaults;

use crate::cli::EnergeticsArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use stickyends::engine::config::{
    ConfigError, EnergeticsConfig, EnergeticsConfigBuilder, MismatchModel,
};
use stickyends::engine::error::EnergeticsError;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialEnergeticsConfig {
    #[serde(rename = "mismatch-model")]
    mismatch_model: Option<MismatchModel>,
    #[serde(rename = "coaxial-stacking")]
    coaxial_stacking: Option<bool>,
    temperature: Option<f64>,
    parameters: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialScoringConfig {
    energetics: Option<PartialEnergeticsConfig>,
}

/// Fully resolved settings for one scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub energetics: EnergeticsConfig,
    /// Parameter file to load instead of the built-in tables.
    pub parameters: Option<PathBuf>,
}

impl PartialScoringConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `args.config` if given, otherwise starts from an empty configuration.
    pub fn load(args: &EnergeticsArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &EnergeticsArgs) -> Result<ScoringConfig> {
        self.apply_set_values(&args.set_values)?;

        let file = self.energetics.take().unwrap_or_default();
        let defaults = DefaultsConfig::default();

        let energetics = EnergeticsConfigBuilder::new()
            .mismatch_model(
                args.model
                    .or(file.mismatch_model)
                    .unwrap_or(defaults.mismatch_model),
            )
            .coaxial_stacking(
                args.coaxial_stacking
                    .as_option()
                    .or(file.coaxial_stacking)
                    .unwrap_or(defaults.coaxial_stacking),
            )
            .temperature_c(
                args.temperature
                    .or(file.temperature)
                    .unwrap_or(defaults.temperature),
            )
            .build()
            .map_err(EnergeticsError::from)?;

        let parameters = args.params.clone().or(file.parameters);
        if let Some(path) = &parameters {
            if !path.exists() {
                return Err(CliError::MissingParameters { path: path.clone() });
            }
        }

        Ok(ScoringConfig {
            energetics,
            parameters,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;
            let energetics = self.energetics.get_or_insert_with(Default::default);

            match key {
                "energetics.mismatch-model" => {
                    energetics.mismatch_model = Some(
                        value_str
                            .parse()
                            .map_err(|e: ConfigError| CliError::Config(e.to_string()))?,
                    );
                }
                "energetics.coaxial-stacking" => {
                    energetics.coaxial_stacking = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                "energetics.temperature" => {
                    energetics.temperature = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
                }
                "energetics.parameters" => {
                    energetics.parameters = Some(PathBuf::from(value_str));
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
