use super::params::ParameterSet;
use crate::core::models::base::{pair_steps, reverse_pair_step};
use crate::core::models::ends::{EndArray, EndType};

/// Stability of each sequence paired with its exact complement.
///
/// Each row is scored as the sum of its nearest-neighbor stacks plus
/// initiation, with the terminal dangle on both strands removed (and the
/// coaxial correction added) at the junction end selected by the end type.
/// Larger values are more stable.
pub fn matching_uniform(params: &ParameterSet, seqs: &EndArray, coaxial_stacking: bool) -> Vec<f64> {
    seqs.rows()
        .map(|row| {
            let steps = pair_steps(row);
            let stacking: f64 = steps.iter().map(|&s| params.nn_dg[s as usize]).sum();

            // The reverse complement's first step mirrors the forward last step, and vice versa.
            let (own, mirrored, dangle) = match seqs.end_type() {
                EndType::DT => (
                    steps[0],
                    reverse_pair_step(steps[steps.len() - 1]),
                    &params.dangle3_dg,
                ),
                EndType::TD => (
                    steps[steps.len() - 1],
                    reverse_pair_step(steps[0]),
                    &params.dangle5_dg,
                ),
            };
            let mut correction = -dangle[own as usize] - dangle[mirrored as usize];
            if coaxial_stacking {
                correction += params.coax_ddg[own as usize] + params.coax_ddg[mirrored as usize];
            }

            -(stacking + params.init_dg + correction)
        })
        .collect()
}
