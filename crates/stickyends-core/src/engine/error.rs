use thiserror::Error;

use super::config::ConfigError;
use crate::core::energetics::params::ParamLoadError;
use crate::core::models::ends::EndType;
use crate::core::models::error::SequenceError;

#[derive(Debug, Error)]
pub enum EnergeticsError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Invalid sequence input: {source}")]
    Sequence {
        #[from]
        source: SequenceError,
    },

    #[error("Failed to load parameters: {source}")]
    Params {
        #[from]
        source: ParamLoadError,
    },

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Operand shapes {left:?} and {right:?} cannot be broadcast together")]
    IncompatibleShapes {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Operands have different end types: {left} and {right}")]
    EndTypeMismatch { left: EndType, right: EndType },
}

impl EnergeticsError {
    /// Whether the call failed because a feature is unavailable rather than
    /// because of bad input.
    pub fn is_not_implemented(&self) -> bool {
        matches!(
            self,
            EnergeticsError::NotImplemented(_)
                | EnergeticsError::Config {
                    source: ConfigError::NotImplemented(_)
                }
        )
    }
}
