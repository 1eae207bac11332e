//! # Models Module
//!
//! Encoded nucleotide sequences and the sticky-end batches the scorers consume.
//!
//! - [`base`] - The 2-bit nucleotide alphabet, complements and pair-step indices
//! - [`ends`] - End types and [`ends::EndArray`], a validated batch of equal-length ends
//! - [`error`] - Validation errors raised while building batches

pub mod base;
pub mod ends;
pub mod error;
