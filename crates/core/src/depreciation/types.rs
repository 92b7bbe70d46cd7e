//! Depreciation register data types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One fixed-asset block entry in the depreciation register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationRow {
    /// Asset label.
    pub asset_name: String,
    /// Rate-table key (IT block). Unknown keys fall back to the default rate.
    pub block_type: String,
    /// Written-down value at period start.
    pub opening_wdv: Decimal,
    /// Additions held at least 180 days (full-rate).
    pub additions_long: Decimal,
    /// Additions held under 180 days (half-rate).
    pub additions_short: Decimal,
    /// Disposals during the period.
    pub deletions: Decimal,
}

impl DepreciationRow {
    /// Creates a register row with no additions or deletions.
    #[must_use]
    pub fn new(
        asset_name: impl Into<String>,
        block_type: impl Into<String>,
        opening_wdv: Decimal,
    ) -> Self {
        Self {
            asset_name: asset_name.into(),
            block_type: block_type.into(),
            opening_wdv,
            additions_long: Decimal::ZERO,
            additions_short: Decimal::ZERO,
            deletions: Decimal::ZERO,
        }
    }

    /// Total capital additions during the period.
    #[must_use]
    pub fn total_additions(&self) -> Decimal {
        self.additions_long + self.additions_short
    }
}

/// Mapping from block type to depreciation rate.
///
/// Static reference data for one calculation run. Lookups never fail:
/// unrecognized blocks resolve to [`RateTable::default_rate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// The explicit fallback rate (15%) for block types absent from the table.
    #[must_use]
    pub fn default_rate() -> Decimal {
        Decimal::new(15, 2)
    }

    /// Builds an empty table; every lookup resolves to the default rate.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Builds the standard IT-block table.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.set_rate("Building", Decimal::new(10, 2));
        table.set_rate("Furniture & Fittings", Decimal::new(10, 2));
        table.set_rate("Plant & Machinery", Decimal::new(15, 2));
        table.set_rate("Motor Vehicles", Decimal::new(15, 2));
        table.set_rate("Computers", Decimal::new(40, 2));
        table.set_rate("Intangibles", Decimal::new(25, 2));
        table
    }

    /// Sets or replaces the rate for a block type.
    pub fn set_rate(&mut self, block_type: impl Into<String>, rate: Decimal) {
        self.rates.insert(block_type.into(), rate);
    }

    /// Applies configured overrides on top of the table.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (&'a String, &'a Decimal)>,
    {
        for (block_type, rate) in overrides {
            self.set_rate(block_type.clone(), *rate);
        }
    }

    /// Resolves the rate for a block type, falling back to the default
    /// rate for unknown keys. Never an error.
    #[must_use]
    pub fn rate_for(&self, block_type: &str) -> Decimal {
        self.rates
            .get(block_type)
            .copied()
            .unwrap_or_else(Self::default_rate)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}
