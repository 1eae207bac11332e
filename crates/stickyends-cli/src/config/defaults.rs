use stickyends::core::energetics::params::REFERENCE_TEMPERATURE_C;
use stickyends::engine::config::MismatchModel;

pub struct DefaultsConfig {
    pub mismatch_model: MismatchModel,
    pub coaxial_stacking: bool,
    pub temperature: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            mismatch_model: MismatchModel::Dangle,
            coaxial_stacking: false,
            temperature: REFERENCE_TEMPERATURE_C,
        }
    }
}
