//! Ledger aggregation helpers.
//!
//! One mapping-lookup-with-default abstraction instead of ad hoc
//! filter-then-sum logic: every helper sums to `Decimal::ZERO` when
//! nothing matches, so callers never see a missing-head error.

use rust_decimal::Decimal;

use super::types::{Category, DEPRECIATION_HEAD, Ledger, LedgerRow, TRADING_HEADS};

impl Ledger {
    /// Sums `amount` over rows whose particular matches `name` exactly
    /// (case-sensitive). A missing name sums to zero.
    #[must_use]
    pub fn sum_by_particular(&self, name: &str) -> Decimal {
        self.rows()
            .iter()
            .filter(|row| row.particular == name)
            .map(|row| row.amount)
            .sum()
    }

    /// Sums `amount` over rows of the given category.
    #[must_use]
    pub fn sum_by_category(&self, category: Category) -> Decimal {
        self.rows()
            .iter()
            .filter(|row| row.category == category)
            .map(|row| row.amount)
            .sum()
    }

    /// Sums the non-cash add-back rows.
    ///
    /// Only indirect-expense rows qualify; an add-back flag on any other
    /// category is ignored.
    #[must_use]
    pub fn sum_add_backs(&self) -> Decimal {
        self.rows()
            .iter()
            .filter(|row| row.add_back && row.category == Category::IndirectExpense)
            .map(|row| row.amount)
            .sum()
    }

    /// Sums the direct expenses: Trading-category rows whose particular
    /// is not one of the four named stock/sale/purchase heads.
    #[must_use]
    pub fn direct_expenses(&self) -> Decimal {
        self.rows()
            .iter()
            .filter(|row| Self::is_direct_expense(row))
            .map(|row| row.amount)
            .sum()
    }

    /// Groups rows of a category by particular, summing duplicates and
    /// preserving first-appearance order.
    #[must_use]
    pub fn grouped(&self, category: Category) -> Vec<(String, Decimal)> {
        let mut out: Vec<(String, Decimal)> = Vec::new();
        for row in self.rows().iter().filter(|row| row.category == category) {
            match out.iter_mut().find(|(name, _)| *name == row.particular) {
                Some((_, total)) => *total += row.amount,
                None => out.push((row.particular.clone(), row.amount)),
            }
        }
        out
    }

    /// Groups the direct-expense rows by particular.
    #[must_use]
    pub fn grouped_direct_expenses(&self) -> Vec<(String, Decimal)> {
        let mut out: Vec<(String, Decimal)> = Vec::new();
        for row in self.rows().iter().filter(|row| Self::is_direct_expense(row)) {
            match out.iter_mut().find(|(name, _)| *name == row.particular) {
                Some((_, total)) => *total += row.amount,
                None => out.push((row.particular.clone(), row.amount)),
            }
        }
        out
    }

    /// Returns a copy of the ledger with the aggregate depreciation total
    /// appended as a synthetic indirect-expense row. This is the sole
    /// bridge from the depreciation calculator into the statements.
    #[must_use]
    pub fn with_depreciation(&self, total: Decimal) -> Self {
        let mut merged = self.clone();
        merged.push(
            LedgerRow::new(DEPRECIATION_HEAD, Category::IndirectExpense, total).with_add_back(),
        );
        merged
    }

    fn is_direct_expense(row: &LedgerRow) -> bool {
        row.category == Category::Trading && !TRADING_HEADS.contains(&row.particular.as_str())
    }
}
