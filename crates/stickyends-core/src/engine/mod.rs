//! # Engine Module
//!
//! This module turns the pure scoring kernels of [`crate::core::energetics`] into a
//! validated, configurable scoring service.
//!
//! ## Overview
//!
//! [`energetics::Energetics`] owns a parameter set, an immutable configuration and a
//! swappable run reducer. Its entry points check operand shapes, broadcast single
//! sequences against batches, reject mixed end types and dispatch to the selected
//! mismatch model.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Mismatch model selection, coaxial stacking and temperature
//! - **Error Handling** ([`error`]) - The engine error taxonomy, wrapping lower-layer errors
//! - **Scoring Façade** ([`energetics`]) - Validation, broadcasting and model dispatch

pub mod config;
pub mod energetics;
pub mod error;
