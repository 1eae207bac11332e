use super::config::{EnergeticsConfig, EnergeticsConfigBuilder, MismatchModel};
use super::error::EnergeticsError;
use crate::core::energetics::matched;
use crate::core::energetics::matrix::{MaxRunReducer, RunReducer};
use crate::core::energetics::mismatch;
use crate::core::energetics::params::ParameterSet;
use crate::core::models::ends::EndArray;
use std::borrow::Cow;
use tracing::{debug, instrument};

/// Scoring façade binding a parameter set, a configuration and a run reducer.
///
/// An `Energetics` is immutable once built and can be shared across threads.
pub struct Energetics {
    config: EnergeticsConfig,
    params: ParameterSet,
    reducer: Box<dyn RunReducer>,
}

impl Energetics {
    pub fn new(config: EnergeticsConfig) -> Self {
        Self {
            config,
            params: ParameterSet::default(),
            reducer: Box::new(MaxRunReducer),
        }
    }

    /// Builds from a mismatch model name, as read from user input.
    pub fn from_options(
        mismatch_model: &str,
        coaxial_stacking: bool,
        temperature_c: f64,
    ) -> Result<Self, EnergeticsError> {
        let config = EnergeticsConfigBuilder::new()
            .mismatch_model(mismatch_model.parse()?)
            .coaxial_stacking(coaxial_stacking)
            .temperature_c(temperature_c)
            .build()?;
        Ok(Self::new(config))
    }

    pub fn with_params(mut self, params: ParameterSet) -> Self {
        self.params = params;
        self
    }

    /// Replaces the row reduction, e.g. with an accelerated implementation.
    pub fn with_reducer(mut self, reducer: impl RunReducer + 'static) -> Self {
        self.reducer = Box::new(reducer);
        self
    }

    pub fn config(&self) -> &EnergeticsConfig {
        &self.config
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Stability of each row paired with its exact complement.
    #[instrument(skip_all, name = "matching_uniform")]
    pub fn matching_uniform(&self, seqs: &EndArray) -> Vec<f64> {
        debug!(
            pairs = seqs.len(),
            width = seqs.width(),
            end_type = %seqs.end_type(),
            "Scoring matched duplexes."
        );
        matched::matching_uniform(&self.params, seqs, self.config.coaxial_stacking)
    }

    /// Scores every pair with the configured mismatch model.
    pub fn uniform(
        &self,
        seqs1: &EndArray,
        seqs2: &EndArray,
    ) -> Result<Vec<f64>, EnergeticsError> {
        debug!(model = %self.config.mismatch_model, "Dispatching mismatch scoring.");
        match self.config.mismatch_model {
            MismatchModel::Dangle => self.uniform_dangle_mismatch(seqs1, seqs2),
            MismatchModel::Loop => self.uniform_loop_mismatch(seqs1, seqs2),
            MismatchModel::Max => self.uniform_max_mismatch(seqs1, seqs2),
        }
    }

    #[instrument(skip_all, name = "uniform_dangle_mismatch")]
    pub fn uniform_dangle_mismatch(
        &self,
        seqs1: &EndArray,
        seqs2: &EndArray,
    ) -> Result<Vec<f64>, EnergeticsError> {
        let (seqs1, seqs2) = broadcast(seqs1, seqs2)?;
        debug!(
            pairs = seqs1.len(),
            width = seqs1.width(),
            end_type = %seqs1.end_type(),
            coaxial_stacking = self.config.coaxial_stacking,
            "Scoring dangle mismatch registers."
        );
        mismatch::uniform_dangle_mismatch(
            &self.params,
            self.reducer.as_ref(),
            &seqs1,
            &seqs2,
            self.config.coaxial_stacking,
        )
        .map_err(EnergeticsError::from)
    }

    pub fn uniform_loop_mismatch(
        &self,
        seqs1: &EndArray,
        seqs2: &EndArray,
    ) -> Result<Vec<f64>, EnergeticsError> {
        broadcast(seqs1, seqs2)?;
        Err(EnergeticsError::NotImplemented(
            "loop mismatch model".to_string(),
        ))
    }

    pub fn uniform_max_mismatch(
        &self,
        seqs1: &EndArray,
        seqs2: &EndArray,
    ) -> Result<Vec<f64>, EnergeticsError> {
        broadcast(seqs1, seqs2)?;
        Err(EnergeticsError::NotImplemented(
            "max mismatch model".to_string(),
        ))
    }
}

/// Checks that two operands can be scored pairwise, repeating a single-row
/// operand to the other's length. Shapes are checked before end types.
pub fn broadcast<'a>(
    seqs1: &'a EndArray,
    seqs2: &'a EndArray,
) -> Result<(Cow<'a, EndArray>, Cow<'a, EndArray>), EnergeticsError> {
    let incompatible = || EnergeticsError::IncompatibleShapes {
        left: seqs1.shape(),
        right: seqs2.shape(),
    };

    let pair = if seqs1.shape() == seqs2.shape() {
        (Cow::Borrowed(seqs1), Cow::Borrowed(seqs2))
    } else if seqs1.width() != seqs2.width() {
        return Err(incompatible());
    } else if seqs1.len() == 1 {
        debug!(rows = seqs2.len(), "Broadcasting first operand.");
        (Cow::Owned(seqs1.repeat(seqs2.len())?), Cow::Borrowed(seqs2))
    } else if seqs2.len() == 1 {
        debug!(rows = seqs1.len(), "Broadcasting second operand.");
        (Cow::Borrowed(seqs1), Cow::Owned(seqs2.repeat(seqs1.len())?))
    } else {
        return Err(incompatible());
    };

    if seqs1.end_type() != seqs2.end_type() {
        return Err(EnergeticsError::EndTypeMismatch {
            left: seqs1.end_type(),
            right: seqs2.end_type(),
        });
    }
    Ok(pair)
}
