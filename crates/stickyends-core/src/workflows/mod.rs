//! # Workflows Module
//!
//! High-level entry points that take raw nucleotide strings, run them through the
//! [`crate::engine`] and return one labelled report per pair.
//!
//! - **Pair Scoring** ([`score`]) - Mismatch, one-against-many and matched-duplex scoring

pub mod score;
