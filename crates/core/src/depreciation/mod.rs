//! Fixed-asset depreciation (written-down value method).

pub mod schedule;
pub mod types;


pub use schedule::{AssetSchedule, DepreciationChart};
pub use types::{DepreciationRow, RateTable};
