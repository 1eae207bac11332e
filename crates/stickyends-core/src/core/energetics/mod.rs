//! # Energetics Module
//!
//! This module holds the nearest-neighbor thermodynamics used to score sticky-end
//! hybridization, as pure functions over encoded sequence batches.
//!
//! ## Overview
//!
//! Energies follow the stability convention: every value is the negated free energy
//! of formation in kcal/mol at 37 °C, so larger values bind more strongly. Two
//! scorers are provided:
//!
//! - **Matched scoring** for a sequence paired with its exact complement
//! - **Dangle mismatch scoring**, which searches every register of two arbitrary
//!   ends and keeps the most stable contiguous matched run
//!
//! ## Key Components
//!
//! - [`params`] - Nearest-neighbor tables, their derived corrections and TOML loading
//! - [`matrix`] - Segmented per-register score storage and row reduction
//! - [`matched`] - Scoring of fully complementary duplexes
//! - [`mismatch`] - The register-shift search for the dangle mismatch model

pub mod matched;
pub mod matrix;
pub mod mismatch;
pub mod params;
