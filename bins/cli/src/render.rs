//! Plain-text rendering of the statement tables.

use rust_decimal::Decimal;

use finstat_core::reports::{FinancialStatements, StatementLine, TwoSidedStatement};

const NAME_WIDTH: usize = 28;
const AMOUNT_WIDTH: usize = 14;
const TABLE_WIDTH: usize = 2 * (NAME_WIDTH + AMOUNT_WIDTH) + 7;

/// Prints the full statement set as aligned two-sided tables.
pub fn print_statements(statements: &FinancialStatements) {
    print_header(statements, &statements.trading.title, &statements.firm.financial_year);
    print_two_sided(&statements.trading);

    print_header(
        statements,
        &statements.profit_and_loss.title,
        &statements.firm.financial_year,
    );
    print_two_sided(&statements.profit_and_loss);

    // The Balance Sheet is "as on" the year end, not for the period.
    let as_on = statements
        .firm
        .financial_year
        .rsplit("TO")
        .next()
        .unwrap_or(&statements.firm.financial_year)
        .trim();
    print_header(statements, &statements.balance_sheet.title, &format!("As on {as_on}"));
    print_two_sided(&statements.balance_sheet);

    if !statements.depreciation.rows.is_empty() {
        println!();
        println!("{:^TABLE_WIDTH$}", "Depreciation Chart");
        println!("{}", "-".repeat(TABLE_WIDTH));
        println!(
            "{:<NAME_WIDTH$} {:>8} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$}",
            "Asset", "Rate (%)", "Opening WDV", "Depreciation", "Closing WDV"
        );
        for row in &statements.depreciation.rows {
            println!(
                "{:<NAME_WIDTH$} {:>8} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$}",
                row.asset_name,
                row.rate_percent(),
                money(row.opening_wdv),
                money(row.depreciation),
                money(row.closing_wdv)
            );
        }
        println!(
            "{:<NAME_WIDTH$} {:>8} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$}",
            "Total",
            "",
            "",
            money(statements.depreciation.total),
            ""
        );
    }

    println!();
    println!("Gross Profit : {}", money(statements.result.gross_profit));
    println!("Net Profit   : {}", money(statements.result.net_profit));
    println!("Cash Profit  : {}", money(statements.result.cash_profit));
    if !statements.result.is_balanced {
        println!(
            "WARNING: Balance Sheet difference of {}",
            money(statements.result.sources_total - statements.result.application_total)
        );
    }
}

fn print_header(statements: &FinancialStatements, title: &str, period: &str) {
    println!();
    println!("{:^TABLE_WIDTH$}", statements.firm.name.to_uppercase());
    if !statements.firm.address.is_empty() {
        println!("{:^TABLE_WIDTH$}", statements.firm.address);
    }
    println!("{title:^TABLE_WIDTH$}");
    println!("{period:^TABLE_WIDTH$}");
}

fn print_two_sided(statement: &TwoSidedStatement) {
    println!("{}", "-".repeat(TABLE_WIDTH));
    println!(
        "{:<NAME_WIDTH$} {:>AMOUNT_WIDTH$} | {:<NAME_WIDTH$} {:>AMOUNT_WIDTH$}",
        statement.left.heading, "Amount", statement.right.heading, "Amount"
    );
    println!("{}", "-".repeat(TABLE_WIDTH));

    let rows = statement.left.lines.len().max(statement.right.lines.len());
    for i in 0..rows {
        let (left_name, left_amount) = cell(statement.left.lines.get(i));
        let (right_name, right_amount) = cell(statement.right.lines.get(i));
        println!(
            "{left_name:<NAME_WIDTH$} {left_amount:>AMOUNT_WIDTH$} | {right_name:<NAME_WIDTH$} {right_amount:>AMOUNT_WIDTH$}"
        );
    }

    println!("{}", "-".repeat(TABLE_WIDTH));
    println!(
        "{:<NAME_WIDTH$} {:>AMOUNT_WIDTH$} | {:<NAME_WIDTH$} {:>AMOUNT_WIDTH$}",
        "Total",
        money(statement.left.total),
        "Total",
        money(statement.right.total)
    );
}

fn cell(line: Option<&StatementLine>) -> (String, String) {
    line.map_or_else(
        || (String::new(), String::new()),
        |line| (line.particular.clone(), money(line.amount)),
    )
}

fn money(amount: Decimal) -> String {
    amount.round_dp(2).to_string()
}
