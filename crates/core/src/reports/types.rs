//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::depreciation::DepreciationChart;

/// Firm header details carried onto every report page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmDetails {
    /// Firm name, e.g. "M/s Rudra Earthmovers".
    pub name: String,
    /// Firm address.
    pub address: String,
    /// Financial year label, e.g. "1-APR-2024 TO 31-MAR-2025".
    pub financial_year: String,
}

/// One line of a statement table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Account head or derived label ("Gross Profit c/d").
    pub particular: String,
    /// Line amount.
    pub amount: Decimal,
}

impl StatementLine {
    /// Creates a statement line.
    #[must_use]
    pub fn new(particular: impl Into<String>, amount: Decimal) -> Self {
        Self {
            particular: particular.into(),
            amount,
        }
    }
}

/// One side of a two-sided statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSide {
    /// Side heading ("Expenses", "Liabilities", ...).
    pub heading: String,
    /// Lines on this side.
    pub lines: Vec<StatementLine>,
    /// Side total.
    pub total: Decimal,
}

impl StatementSide {
    /// Builds a side from lines, totalling as it goes.
    #[must_use]
    pub fn new(heading: impl Into<String>, lines: Vec<StatementLine>) -> Self {
        let total = lines.iter().map(|line| line.amount).sum();
        Self {
            heading: heading.into(),
            lines,
            total,
        }
    }
}

/// A two-sided account statement in the traditional horizontal layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoSidedStatement {
    /// Statement title ("Trading Account", "Balance Sheet", ...).
    pub title: String,
    /// Debit/liabilities side.
    pub left: StatementSide,
    /// Credit/assets side.
    pub right: StatementSide,
}

/// The output aggregate of one statement-builder run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementResult {
    /// Trading-level profit before indirect income/expense.
    pub gross_profit: Decimal,
    /// Gross profit adjusted for indirect income and expense.
    pub net_profit: Decimal,
    /// Net profit with non-cash add-back expenses reversed.
    pub cash_profit: Decimal,
    /// Liabilities plus net profit.
    pub sources_total: Decimal,
    /// Assets plus closing stock.
    pub application_total: Decimal,
    /// Whether sources and application agree at 2 decimal places.
    pub is_balanced: bool,
}

/// Everything one "generate reports" request produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialStatements {
    /// Firm header details.
    pub firm: FirmDetails,
    /// Date the statements were generated.
    pub generated_on: NaiveDate,
    /// Trading account.
    pub trading: TwoSidedStatement,
    /// Profit & Loss account.
    pub profit_and_loss: TwoSidedStatement,
    /// Balance Sheet (Sources vs Application of Funds).
    pub balance_sheet: TwoSidedStatement,
    /// Headline figures and the balance check.
    pub result: StatementResult,
    /// Per-asset depreciation chart.
    pub depreciation: DepreciationChart,
}
