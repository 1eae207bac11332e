use crate::utils::parser::ParseError;
use std::path::PathBuf;
use stickyends::engine::error::EnergeticsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Energetics(#[from] EnergeticsError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parameter file does not exist: {path}", path = path.display())]
    MissingParameters { path: PathBuf },

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid pair argument: {0}")]
    Pair(#[from] ParseError),

    #[error("No pairs to score. Provide --pair SEQ1,SEQ2 or --input FILE.")]
    NoPairs,

    #[error("No ends to score {query} against. List them as arguments or with --input.")]
    NoTargets { query: String },

    #[error("Cannot open log file '{path}': {source}", path = path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build global thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// True when the request names a model or condition the library does not
    /// implement yet, as opposed to malformed input.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, CliError::Energetics(e) if e.is_not_implemented())
    }

    /// Process exit status: 2 for unimplemented features, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        if self.is_not_implemented() { 2 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stickyends::engine::config::ConfigError;

    #[test]
    fn unimplemented_models_and_temperatures_are_flagged() {
        let model = CliError::from(EnergeticsError::NotImplemented("loop".to_string()));
        let temperature = CliError::from(EnergeticsError::from(ConfigError::NotImplemented(
            "temperature 40 C".to_string(),
        )));
        assert!(model.is_not_implemented());
        assert!(temperature.is_not_implemented());
        assert_eq!(model.exit_code(), 2);
        assert_eq!(temperature.exit_code(), 2);
    }

    #[test]
    fn input_errors_are_ordinary_failures() {
        let pair = CliError::from(ParseError::InvalidPairFormat("gatcc".to_string()));
        assert!(!pair.is_not_implemented());
        assert_eq!(pair.exit_code(), 1);
        assert_eq!(CliError::NoPairs.exit_code(), 1);
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = CliError::NoTargets {
            query: "gatcc".to_string(),
        };
        assert!(err.to_string().contains("gatcc"));

        let err = CliError::LogFile {
            path: PathBuf::from("/var/log/scores.log"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/var/log/scores.log"));

        let err = CliError::from(ParseError::InvalidPairFormat("gatcc;aggat".to_string()));
        assert!(err.to_string().starts_with("Invalid pair argument: Invalid pair 'gatcc;aggat'"));
    }
}
