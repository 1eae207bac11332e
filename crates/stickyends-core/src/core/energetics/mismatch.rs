//! Register-shift search for the dangle mismatch model.
//!
//! Strand 1 is held fixed while the reverse complement of strand 2 slides
//! along it. Every register gets one segment of a [`ScoreMatrix`] row:
//!
//! - a stack contributes its nearest-neighbor free energy only where both
//!   strands present the same pair-step, otherwise exactly zero, so a
//!   mismatch acts like a strand end rather than an interior loop;
//! - the two outermost cells of each register receive end corrections
//!   (dangles, the tail penalty, coaxial stacking at full alignment), and
//!   only when the cell already holds a matched stack.
//!
//! Shifted registers come in pairs, one with the strands pushed together
//! past full alignment and one with them pulled apart; which sign is which
//! depends on the end type. All cells use the positive stability convention.

use super::matrix::{RunReducer, ScoreMatrix};
use super::params::{ParameterSet, Table};
use crate::core::models::base::{pair_step, pair_steps, reverse_pair_step, step_head, step_tail};
use crate::core::models::ends::{EndArray, EndType};
use crate::core::models::error::SequenceError;
use tracing::trace;

/// Adds `delta` to `cell` only if the cell holds a matched stack.
#[inline]
fn correct(cell: &mut f64, delta: f64) {
    if *cell != 0.0 {
        *cell += delta;
    }
}

fn fill_masked(cells: &mut [f64], top: &[u8], bottom: &[u8], nn_dg: &Table) {
    for ((cell, &a), &b) in cells.iter_mut().zip(top).zip(bottom) {
        *cell = if a == b { -nn_dg[a as usize] } else { 0.0 };
    }
}

fn correct_ends(cells: &mut [f64], first: f64, last: f64) {
    let n = cells.len();
    correct(&mut cells[0], first);
    correct(&mut cells[n - 1], last);
}

/// `(shift, len)` of every register for sequences with `steps` pair-steps.
/// Shifted registers come in `+o, -o` pairs; full alignment is last and one
/// cell longer than the sequence because it includes both junction stacks.
pub fn register_layout(steps: usize) -> Vec<(isize, usize)> {
    let mut layout = Vec::with_capacity(2 * steps.saturating_sub(2) + 1);
    for o in 1..steps.saturating_sub(1) {
        let len = steps - 1 - o;
        layout.push((o as isize, len));
        layout.push((-(o as isize), len));
    }
    layout.push((0, steps + 1));
    layout
}

/// Pair-step views of one sequence pair, aligned for register comparison.
struct PairSteps {
    s1: Vec<u8>,
    s2: Vec<u8>,
    /// Strand 1 without its adjacent-base step.
    core1: Vec<u8>,
    /// Reverse complement of strand 2 without its adjacent-base step.
    core2: Vec<u8>,
    /// Strand 1 extended across the junction, for the full-alignment register.
    full1: Vec<u8>,
    full2: Vec<u8>,
}

impl PairSteps {
    fn new(end_type: EndType, row1: &[u8], row2: &[u8]) -> Self {
        let s1 = pair_steps(row1);
        let s2 = pair_steps(row2);
        let s2r: Vec<u8> = s2.iter().rev().map(|&s| reverse_pair_step(s)).collect();
        let l = s1.len();

        let (core1, core2, full1, full2) = match end_type {
            EndType::DT => {
                let mut full1 = s1.clone();
                full1.push(pair_step(step_tail(s1[l - 1]), step_tail(s2r[l - 1])));
                let mut full2 = vec![pair_step(step_head(s1[0]), step_head(s2r[0]))];
                full2.extend_from_slice(&s2r);
                (s1[1..].to_vec(), s2r[..l - 1].to_vec(), full1, full2)
            }
            EndType::TD => {
                let mut full1 = vec![pair_step(step_head(s2r[0]), step_head(s1[0]))];
                full1.extend_from_slice(&s1);
                let mut full2 = s2r.clone();
                full2.push(pair_step(step_tail(s2r[l - 1]), step_tail(s1[l - 1])));
                (s1[..l - 1].to_vec(), s2r[1..].to_vec(), full1, full2)
            }
        };

        Self {
            s1,
            s2,
            core1,
            core2,
            full1,
            full2,
        }
    }
}

fn check_compatible(seqs1: &EndArray, seqs2: &EndArray) -> Result<(), SequenceError> {
    if seqs1.shape() != seqs2.shape() {
        return Err(SequenceError::ShapeMismatch {
            left: seqs1.shape(),
            right: seqs2.shape(),
        });
    }
    if seqs1.end_type() != seqs2.end_type() {
        return Err(SequenceError::MixedEndTypes {
            left: seqs1.end_type(),
            right: seqs2.end_type(),
        });
    }
    Ok(())
}

/// Builds the per-register score matrix for two batches of identical shape
/// and end type. Batches that differ in either are rejected, never truncated.
pub fn dangle_mismatch_matrix(
    params: &ParameterSet,
    seqs1: &EndArray,
    seqs2: &EndArray,
    coaxial_stacking: bool,
) -> Result<ScoreMatrix, SequenceError> {
    check_compatible(seqs1, seqs2)?;

    let end_type = seqs1.end_type();
    let l = seqs1.width() - 1;
    let layout = register_layout(l);
    let zero = layout.len() - 1;
    let mut matrix = ScoreMatrix::with_segments(seqs1.len(), &layout);

    let nn = &params.nn_dg;
    let d3 = &params.dangle3_dg;
    let d5 = &params.dangle5_dg;
    let tail = params.tail_dg;
    let coax = |step: u8| {
        if coaxial_stacking {
            params.coax_ddg[step as usize]
        } else {
            0.0
        }
    };

    for (row, (row1, row2)) in seqs1.rows().zip(seqs2.rows()).enumerate() {
        let p = PairSteps::new(end_type, row1, row2);
        let (s1, s2) = (&p.s1, &p.s2);

        for o in 1..l.saturating_sub(1) {
            let zn = l - 1 - o;
            let forward = 2 * (o - 1);

            let cells = matrix.segment_mut(row, forward);
            fill_masked(cells, &p.core1[..zn], &p.core2[o..], nn);
            match end_type {
                EndType::DT => correct_ends(
                    cells,
                    -nn[s1[0] as usize] - tail + d3[s1[0] as usize],
                    -nn[s2[0] as usize] - tail + d3[s2[0] as usize],
                ),
                EndType::TD => {
                    correct_ends(cells, -d3[p.core1[zn] as usize], -d3[s2[zn] as usize])
                }
            }

            let cells = matrix.segment_mut(row, forward + 1);
            fill_masked(cells, &p.core2[..zn], &p.core1[o..], nn);
            match end_type {
                EndType::DT => {
                    correct_ends(cells, -d5[p.core1[o - 1] as usize], -d5[s2[o] as usize])
                }
                EndType::TD => correct_ends(
                    cells,
                    -nn[s1[l - 1] as usize] - tail + d5[s1[l - 1] as usize],
                    -nn[s2[l - 1] as usize] - tail + d5[s2[l - 1] as usize],
                ),
            }
        }

        // At full alignment the exterior dangle becomes an interior stack, so
        // its sign is reversed relative to the shifted registers.
        let cells = matrix.segment_mut(row, zero);
        fill_masked(cells, &p.full1, &p.full2, nn);
        let (dangle, first, last) = match end_type {
            EndType::DT => (d3, s1[0], s2[0]),
            EndType::TD => (d5, s1[l - 1], s2[l - 1]),
        };
        correct_ends(
            cells,
            dangle[first as usize] - coax(first),
            dangle[last as usize] - coax(last),
        );
    }

    trace!(
        rows = matrix.rows(),
        cols = matrix.cols(),
        registers = matrix.segments().len(),
        "Built dangle mismatch score matrix"
    );
    Ok(matrix)
}

/// Most stable register energy for every pair, initiation included.
pub fn uniform_dangle_mismatch(
    params: &ParameterSet,
    reducer: &dyn RunReducer,
    seqs1: &EndArray,
    seqs2: &EndArray,
    coaxial_stacking: bool,
) -> Result<Vec<f64>, SequenceError> {
    let matrix = dangle_mismatch_matrix(params, seqs1, seqs2, coaxial_stacking)?;
    Ok(reducer
        .reduce(&matrix)
        .into_iter()
        .map(|best| best - params.init_dg)
        .collect())
}
