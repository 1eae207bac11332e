//! # Core Module
//!
//! This module provides the stateless building blocks of the library: the
//! nucleotide encoding, validated sticky-end batches, and the nearest-neighbor
//! scoring algorithms that operate on them.
//!
//! ## Architecture
//!
//! - **Sequence Representation** ([`models`]) - Base encoding, pair-steps and [`models::ends::EndArray`]
//! - **Thermodynamics** ([`energetics`]) - Parameter tables and the matched and mismatch scorers
//!
//! Functions here take every input explicitly and never fail on validated
//! batches; validation and dispatch live in [`crate::engine`].

pub mod energetics;
pub mod models;
