//! Statement generation service.

use rust_decimal::Decimal;

use super::types::{
    FinancialStatements, FirmDetails, StatementLine, StatementResult, StatementSide,
    TwoSidedStatement,
};
use crate::depreciation::DepreciationChart;
use crate::ledger::{CLOSING_STOCK, Category, Ledger, OPENING_STOCK, PURCHASE, SALES};

/// Service for building the Trading/P&L account and Balance Sheet.
///
/// Stateless and total: every operation produces a numeric answer from
/// whatever rows it receives. Absent heads contribute zero; the only
/// user-visible warning signal is [`StatementResult::is_balanced`].
pub struct StatementBuilder;

impl StatementBuilder {
    /// Gross profit: (Sales + Closing Stock) less (Opening Stock +
    /// Purchase + direct expenses).
    ///
    /// Direct expenses are every Trading-category row outside the four
    /// named heads, so ledgers that fold "Direct Expenses" into the
    /// Trading category and ledgers that name it explicitly both net to
    /// the same figure.
    #[must_use]
    pub fn gross_profit(ledger: &Ledger) -> Decimal {
        let credit = ledger.sum_by_particular(SALES) + ledger.sum_by_particular(CLOSING_STOCK);
        let debit = ledger.sum_by_particular(OPENING_STOCK)
            + ledger.sum_by_particular(PURCHASE)
            + ledger.direct_expenses();
        credit - debit
    }

    /// Net profit: gross profit plus indirect income less indirect expense.
    #[must_use]
    pub fn net_profit(ledger: &Ledger, gross_profit: Decimal) -> Decimal {
        gross_profit + ledger.sum_by_category(Category::IndirectIncome)
            - ledger.sum_by_category(Category::IndirectExpense)
    }

    /// Cash profit: net profit with add-back indirect expenses reversed.
    #[must_use]
    pub fn cash_profit(ledger: &Ledger, net_profit: Decimal) -> Decimal {
        net_profit + ledger.sum_add_backs()
    }

    /// Computes the headline figures and the Sources/Application
    /// reconciliation for a ledger (depreciation already merged in).
    #[must_use]
    pub fn statement_result(ledger: &Ledger) -> StatementResult {
        let gross_profit = Self::gross_profit(ledger);
        let net_profit = Self::net_profit(ledger, gross_profit);
        let cash_profit = Self::cash_profit(ledger, net_profit);

        let sources_total = ledger.sum_by_category(Category::Liability) + net_profit;
        let application_total =
            ledger.sum_by_category(Category::Asset) + ledger.sum_by_particular(CLOSING_STOCK);

        StatementResult {
            gross_profit,
            net_profit,
            cash_profit,
            sources_total,
            application_total,
            is_balanced: sources_total.round_dp(2) == application_total.round_dp(2),
        }
    }

    /// Builds the complete statement set for one firm and year.
    ///
    /// Merges the depreciation total into the ledger as a synthetic
    /// indirect-expense row, computes the result, and lays out the three
    /// report tables.
    #[must_use]
    pub fn build(
        firm: FirmDetails,
        ledger: &Ledger,
        depreciation: &DepreciationChart,
    ) -> FinancialStatements {
        let merged = ledger.with_depreciation(depreciation.total);
        let result = Self::statement_result(&merged);

        FinancialStatements {
            firm,
            generated_on: chrono::Utc::now().date_naive(),
            trading: Self::trading_account(&merged, result.gross_profit),
            profit_and_loss: Self::profit_and_loss(&merged, &result),
            balance_sheet: Self::balance_sheet(&merged, result.net_profit),
            result,
            depreciation: depreciation.clone(),
        }
    }

    /// Trading account: stock, purchases and direct expenses against
    /// sales and closing stock, balanced by the gross profit carried down.
    fn trading_account(ledger: &Ledger, gross_profit: Decimal) -> TwoSidedStatement {
        let mut debit = Vec::new();
        Self::push_nonzero(&mut debit, OPENING_STOCK, ledger.sum_by_particular(OPENING_STOCK));
        Self::push_nonzero(&mut debit, PURCHASE, ledger.sum_by_particular(PURCHASE));
        for (particular, amount) in ledger.grouped_direct_expenses() {
            Self::push_nonzero(&mut debit, &particular, amount);
        }
        debit.push(StatementLine::new("Gross Profit c/d", gross_profit));

        let mut credit = Vec::new();
        Self::push_nonzero(&mut credit, SALES, ledger.sum_by_particular(SALES));
        Self::push_nonzero(&mut credit, CLOSING_STOCK, ledger.sum_by_particular(CLOSING_STOCK));

        TwoSidedStatement {
            title: "Trading Account".to_string(),
            left: StatementSide::new("Particulars", debit),
            right: StatementSide::new("Particulars", credit),
        }
    }

    /// P&L account: indirect expenses against gross profit brought down
    /// plus indirect income, balanced by the net profit line.
    fn profit_and_loss(ledger: &Ledger, result: &StatementResult) -> TwoSidedStatement {
        let mut debit = Vec::new();
        for (particular, amount) in ledger.grouped(Category::IndirectExpense) {
            Self::push_nonzero(&mut debit, &particular, amount);
        }
        debit.push(StatementLine::new("Net Profit", result.net_profit));

        let mut credit = vec![StatementLine::new("Gross Profit b/d", result.gross_profit)];
        for (particular, amount) in ledger.grouped(Category::IndirectIncome) {
            Self::push_nonzero(&mut credit, &particular, amount);
        }

        TwoSidedStatement {
            title: "Profit & Loss A/c".to_string(),
            left: StatementSide::new("Particulars", debit),
            right: StatementSide::new("Particulars", credit),
        }
    }

    /// Balance Sheet: liabilities plus net profit (Sources of Funds)
    /// against assets plus closing stock (Application of Funds).
    fn balance_sheet(ledger: &Ledger, net_profit: Decimal) -> TwoSidedStatement {
        let mut liabilities = Vec::new();
        for (particular, amount) in ledger.grouped(Category::Liability) {
            Self::push_nonzero(&mut liabilities, &particular, amount);
        }
        liabilities.push(StatementLine::new("Net Profit", net_profit));

        let mut assets = Vec::new();
        for (particular, amount) in ledger.grouped(Category::Asset) {
            Self::push_nonzero(&mut assets, &particular, amount);
        }
        Self::push_nonzero(&mut assets, CLOSING_STOCK, ledger.sum_by_particular(CLOSING_STOCK));

        TwoSidedStatement {
            title: "Balance Sheet".to_string(),
            left: StatementSide::new("Liabilities", liabilities),
            right: StatementSide::new("Assets", assets),
        }
    }

    fn push_nonzero(lines: &mut Vec<StatementLine>, particular: &str, amount: Decimal) {
        if !amount.is_zero() {
            lines.push(StatementLine::new(particular, amount));
        }
    }
}
