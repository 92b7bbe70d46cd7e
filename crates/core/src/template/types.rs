//! Template data types.
//!
//! A template is an explicit value passed into calls, never process-wide
//! mutable state. It seeds a new firm/year ledger with the standard
//! account heads at zero so the input layer starts from a complete grid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{CLOSING_STOCK, Category, Ledger, LedgerRow, OPENING_STOCK, PURCHASE, SALES};

/// Firm classification selecting a default account-head list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirmCategory {
    /// Buys and sells goods.
    Trader,
    /// Produces goods; adds factory heads to the trading side.
    Manufacturer,
    /// Sells services; no stock or purchase heads.
    ServiceProvider,
}

impl FirmCategory {
    /// Parses a category label as entered on the command line or in
    /// configuration.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "trader" => Some(Self::Trader),
            "manufacturer" => Some(Self::Manufacturer),
            "service_provider" | "service-provider" | "service" => Some(Self::ServiceProvider),
            _ => None,
        }
    }
}

/// A default account-head list for one firm category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTemplate {
    rows: Vec<LedgerRow>,
}

impl LedgerTemplate {
    /// Builds the default template for a firm category.
    #[must_use]
    pub fn for_category(category: FirmCategory) -> Self {
        let mut rows = Vec::new();

        match category {
            FirmCategory::Trader => {
                Self::trading_heads(&mut rows);
                Self::head(&mut rows, "Freight Inward", Category::Trading);
            }
            FirmCategory::Manufacturer => {
                Self::trading_heads(&mut rows);
                Self::head(&mut rows, "Wages", Category::Trading);
                Self::head(&mut rows, "Power & Fuel", Category::Trading);
                Self::head(&mut rows, "Freight Inward", Category::Trading);
                Self::head(&mut rows, "Factory Rent", Category::Trading);
            }
            FirmCategory::ServiceProvider => {
                Self::head(&mut rows, SALES, Category::Trading);
                Self::head(&mut rows, "Direct Expenses", Category::Trading);
            }
        }

        for particular in [
            "Salary",
            "Rent",
            "Electricity",
            "Telephone",
            "Printing & Stationery",
            "Bank Charges",
            "Interest Paid",
            "Legal & Professional",
        ] {
            Self::head(&mut rows, particular, Category::IndirectExpense);
        }

        for particular in ["Interest Received", "Commission Received"] {
            Self::head(&mut rows, particular, Category::IndirectIncome);
        }

        for particular in ["Capital", "Sundry Creditors", "Secured Loans", "Duties & Taxes"] {
            Self::head(&mut rows, particular, Category::Liability);
        }

        for particular in ["Cash in Hand", "Bank Accounts", "Sundry Debtors", "Fixed Assets"] {
            Self::head(&mut rows, particular, Category::Asset);
        }

        Self { rows }
    }

    /// The template rows, all at zero amount.
    #[must_use]
    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    /// Materializes the template as a fresh ledger.
    #[must_use]
    pub fn to_ledger(&self) -> Ledger {
        Ledger::new(self.rows.clone())
    }

    fn trading_heads(rows: &mut Vec<LedgerRow>) {
        for particular in [SALES, OPENING_STOCK, PURCHASE, CLOSING_STOCK] {
            Self::head(rows, particular, Category::Trading);
        }
        Self::head(rows, "Direct Expenses", Category::Trading);
    }

    fn head(rows: &mut Vec<LedgerRow>, particular: &str, category: Category) {
        rows.push(LedgerRow::new(particular, category, Decimal::ZERO));
    }
}
