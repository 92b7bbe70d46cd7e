//! File-per-firm-per-year persistence and report export for finstat.
//!
//! This crate owns every filesystem concern the core engine deliberately
//! lacks: the ledger and depreciation-register CSV files keyed by firm
//! name and financial year, application configuration, and CSV export of
//! the finished statements.
//!
//! Malformed input is normalized here, at the boundary: numeric cells
//! that fail to parse become zero and unknown category labels fall back
//! to indirect expense, each with a warning, so the engine downstream
//! stays total.

pub mod config;
pub mod error;
pub mod export;
pub mod firm;
pub mod format;

pub use config::{AppConfig, FirmConfig};
pub use error::StoreError;
pub use firm::FirmStore;
