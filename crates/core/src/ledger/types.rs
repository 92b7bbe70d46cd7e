//! Ledger data types.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The "Sales" account head.
pub const SALES: &str = "Sales";
/// The "Opening Stock" account head.
pub const OPENING_STOCK: &str = "Opening Stock";
/// The "Purchase" account head.
pub const PURCHASE: &str = "Purchase";
/// The "Closing Stock" account head (carried from the trading ledger into assets).
pub const CLOSING_STOCK: &str = "Closing Stock";
/// The synthetic head carrying the aggregate depreciation total.
pub const DEPRECIATION_HEAD: &str = "Depreciation";

/// The four named trading heads. Any other Trading-category row is a
/// direct expense.
pub const TRADING_HEADS: [&str; 4] = [SALES, OPENING_STOCK, PURCHASE, CLOSING_STOCK];

/// Ledger row classification.
///
/// A closed set compared by exact equality everywhere. Input layers may
/// accept looser labels via [`Category::from_label`], but the engine
/// itself never matches on substrings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Trading account row (stock, purchases, sales, direct expenses).
    #[default]
    Trading,
    /// Indirect income (interest received, commission, etc.).
    IndirectIncome,
    /// Indirect expense (salary, rent, depreciation, etc.).
    IndirectExpense,
    /// Balance Sheet liability (capital, creditors, loans).
    Liability,
    /// Balance Sheet asset (cash, debtors, fixed assets).
    Asset,
}

impl Category {
    /// Parses a human-entered category label.
    ///
    /// Accepts the short aliases the ledger files use ("Income",
    /// "Expense") alongside the full names. Returns `None` for anything
    /// unrecognized; the caller decides the fallback.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Trading" => Some(Self::Trading),
            "Income" | "Indirect Income" | "IndirectIncome" => Some(Self::IndirectIncome),
            "Expense" | "Indirect Expense" | "IndirectExpense" => Some(Self::IndirectExpense),
            "Liability" | "Liabilities" => Some(Self::Liability),
            "Asset" | "Assets" => Some(Self::Asset),
            _ => None,
        }
    }

    /// Canonical label used in ledger files and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Trading => "Trading",
            Self::IndirectIncome => "Income",
            Self::IndirectExpense => "Expense",
            Self::Liability => "Liability",
            Self::Asset => "Asset",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ledger line item.
///
/// Particulars need not be unique; rows sharing a particular are summed
/// during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Account head or free-text label.
    pub particular: String,
    /// Row classification.
    pub category: Category,
    /// Signed amount; zero is valid and the default.
    pub amount: Decimal,
    /// Marks a non-cash expense reversed when computing cash profit.
    #[serde(default)]
    pub add_back: bool,
}

impl LedgerRow {
    /// Creates a ledger row with the add-back flag cleared.
    #[must_use]
    pub fn new(particular: impl Into<String>, category: Category, amount: Decimal) -> Self {
        Self {
            particular: particular.into(),
            category,
            amount,
            add_back: false,
        }
    }

    /// Returns the row with the add-back flag set.
    #[must_use]
    pub fn with_add_back(mut self) -> Self {
        self.add_back = true;
        self
    }
}

/// A flat ledger: the complete set of line items for one firm and year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    rows: Vec<LedgerRow>,
}

impl Ledger {
    /// Creates a ledger from rows.
    #[must_use]
    pub fn new(rows: Vec<LedgerRow>) -> Self {
        Self { rows }
    }

    /// All rows in entry order.
    #[must_use]
    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    /// Appends a row.
    pub fn push(&mut self, row: LedgerRow) {
        self.rows.push(row);
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the ledger has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<LedgerRow>> for Ledger {
    fn from(rows: Vec<LedgerRow>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<LedgerRow> for Ledger {
    fn from_iter<I: IntoIterator<Item = LedgerRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
