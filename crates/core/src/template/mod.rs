//! Default account-head templates.

pub mod types;

pub use types::{FirmCategory, LedgerTemplate};
