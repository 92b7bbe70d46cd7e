//! Core calculation engine for finstat.
//!
//! This crate contains pure calculation logic with ZERO file or network
//! dependencies. It turns a flat categorized ledger plus a fixed-asset
//! depreciation register into a Trading/Profit & Loss account, a Balance
//! Sheet reconciliation and a depreciation chart.
//!
//! # Modules
//!
//! - `ledger` - Categorized ledger rows and aggregation helpers
//! - `depreciation` - Fixed-asset depreciation schedules (WDV method)
//! - `reports` - Statement building and Sources/Application reconciliation
//! - `template` - Default account-head lists per firm category
//!
//! The engine is total over its typed input: absent heads sum to zero,
//! unknown depreciation blocks fall back to a default rate, and an
//! imbalanced Balance Sheet is reported through a flag, never an error.

pub mod depreciation;
pub mod ledger;
pub mod reports;
pub mod template;
