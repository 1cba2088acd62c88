//! Severance Engine for Mexican labor law
//!
//! This crate calculates the two statutory settlements owed on separation
//! under the Ley Federal del Trabajo: the finiquito (voluntary separation)
//! and the liquidación (unjustified dismissal). It validates form input,
//! produces an itemized and audited breakdown, and keeps a bounded history
//! of past calculations.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod models;
pub mod validation;
