//! # Sticky Ends Core Library
//!
//! Nearest-neighbor free energy estimates for the hybridization of DNA sticky ends,
//! as used when designing tile sets for algorithmic self-assembly.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the numerical kernels stay
//! pure and testable while configuration and validation live above them.
//!
//! - **[`core`]: The Foundation.** Base encoding, validated batches of ends
//!   (`EndArray`), the parameter tables (`ParameterSet`) and the scoring kernels
//!   (`matched`, `mismatch`).
//!
//! - **[`engine`]: The Logic Core.** `Energetics` binds a parameter set, an
//!   `EnergeticsConfig` and a run reducer, validates and broadcasts its inputs and
//!   dispatches to the configured mismatch model.
//!
//! - **[`workflows`]: The Public API.** String-level entry points that parse raw
//!   sequences, run the engine and return labelled reports.

pub mod core;
pub mod engine;
pub mod workflows;
