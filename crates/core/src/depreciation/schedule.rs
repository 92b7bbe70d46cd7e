//! Depreciation schedule calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{DepreciationRow, RateTable};

/// Per-asset depreciation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSchedule {
    /// Asset label.
    pub asset_name: String,
    /// Resolved block type.
    pub block_type: String,
    /// Applied rate as a fraction.
    pub rate: Decimal,
    /// Written-down value at period start.
    pub opening_wdv: Decimal,
    /// Total additions (long plus short).
    pub total_additions: Decimal,
    /// Disposals during the period.
    pub deletions: Decimal,
    /// Depreciation charged for the period.
    pub depreciation: Decimal,
    /// Written-down value carried forward.
    pub closing_wdv: Decimal,
}

impl AssetSchedule {
    /// Computes the schedule for one register row at the given rate.
    ///
    /// Short-held additions are charged at half rate only (180-day
    /// rule); they join the block at full value for the closing WDV.
    #[must_use]
    pub fn from_row(row: &DepreciationRow, rate: Decimal) -> Self {
        let depreciable_base = row.opening_wdv + row.additions_long - row.deletions;
        let depreciation =
            depreciable_base * rate + row.additions_short * (rate / Decimal::TWO);
        let closing_wdv = (row.opening_wdv + row.additions_long + row.additions_short
            - row.deletions)
            - depreciation;

        Self {
            asset_name: row.asset_name.clone(),
            block_type: row.block_type.clone(),
            rate,
            opening_wdv: row.opening_wdv,
            total_additions: row.total_additions(),
            deletions: row.deletions,
            depreciation,
            closing_wdv,
        }
    }

    /// The rate as a display percentage, e.g. "15%".
    #[must_use]
    pub fn rate_percent(&self) -> String {
        format!("{}%", (self.rate * Decimal::ONE_HUNDRED).normalize())
    }
}

/// The full depreciation chart: per-asset schedules plus the aggregate
/// total fed into the statement builder as an indirect expense.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationChart {
    /// Per-asset schedules in register order.
    pub rows: Vec<AssetSchedule>,
    /// Sum of all per-asset depreciation amounts.
    pub total: Decimal,
}

impl DepreciationChart {
    /// Computes the chart for a register against a rate table.
    ///
    /// Pure over its inputs; rows with unknown block types use the
    /// table's default rate rather than failing.
    #[must_use]
    pub fn build(register: &[DepreciationRow], rates: &RateTable) -> Self {
        let rows: Vec<AssetSchedule> = register
            .iter()
            .map(|row| AssetSchedule::from_row(row, rates.rate_for(&row.block_type)))
            .collect();
        let total = rows.iter().map(|row| row.depreciation).sum();

        Self { rows, total }
    }
}
