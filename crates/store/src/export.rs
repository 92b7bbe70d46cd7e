//! CSV export of finished statements.
//!
//! Column names here are load-bearing: downstream spreadsheets consume
//! `Asset`, `Opening WDV`, `Depreciation`, `Closing WDV` and `Rate (%)`
//! by header.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use rust_decimal::Decimal;
use tracing::info;

use finstat_core::depreciation::DepreciationChart;
use finstat_core::reports::{FinancialStatements, TwoSidedStatement};

use crate::error::StoreError;

/// Writes the depreciation chart with its report headers and total line.
pub fn write_chart<W: Write>(writer: W, chart: &DepreciationChart) -> Result<(), StoreError> {
    let mut csv = WriterBuilder::new().from_writer(writer);
    csv.write_record([
        "Asset",
        "Block",
        "Rate (%)",
        "Opening WDV",
        "Additions",
        "Deletions",
        "Depreciation",
        "Closing WDV",
    ])?;

    for row in &chart.rows {
        csv.write_record([
            row.asset_name.as_str(),
            row.block_type.as_str(),
            &row.rate_percent(),
            &money(row.opening_wdv),
            &money(row.total_additions),
            &money(row.deletions),
            &money(row.depreciation),
            &money(row.closing_wdv),
        ])?;
    }
    csv.write_record(["Total", "", "", "", "", "", &money(chart.total), ""])?;
    csv.flush()?;
    Ok(())
}

/// Writes a two-sided statement with both sides zipped row by row, the
/// way the printed reports lay them out.
pub fn write_statement<W: Write>(
    writer: W,
    statement: &TwoSidedStatement,
) -> Result<(), StoreError> {
    let mut csv = WriterBuilder::new().from_writer(writer);
    csv.write_record([
        statement.left.heading.as_str(),
        "Amount",
        statement.right.heading.as_str(),
        "Amount",
    ])?;

    let rows = statement.left.lines.len().max(statement.right.lines.len());
    for i in 0..rows {
        let left = statement.left.lines.get(i);
        let right = statement.right.lines.get(i);
        csv.write_record([
            left.map_or("", |line| line.particular.as_str()),
            &left.map_or_else(String::new, |line| money(line.amount)),
            right.map_or("", |line| line.particular.as_str()),
            &right.map_or_else(String::new, |line| money(line.amount)),
        ])?;
    }
    csv.write_record([
        "Total",
        &money(statement.left.total),
        "Total",
        &money(statement.right.total),
    ])?;
    csv.flush()?;
    Ok(())
}

/// Exports the full statement set into a directory, one file per report.
pub fn export_all(dir: &Path, statements: &FinancialStatements) -> Result<(), StoreError> {
    std::fs::create_dir_all(dir)?;

    write_statement(File::create(dir.join("trading.csv"))?, &statements.trading)?;
    write_statement(
        File::create(dir.join("profit_and_loss.csv"))?,
        &statements.profit_and_loss,
    )?;
    write_statement(
        File::create(dir.join("balance_sheet.csv"))?,
        &statements.balance_sheet,
    )?;
    write_chart(
        File::create(dir.join("depreciation_chart.csv"))?,
        &statements.depreciation,
    )?;

    info!(dir = %dir.display(), "statements exported");
    Ok(())
}

fn money(amount: Decimal) -> String {
    amount.round_dp(2).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use finstat_core::depreciation::{DepreciationRow, RateTable};
    use finstat_core::reports::{StatementLine, StatementSide};
    use rust_decimal_macros::dec;

    #[test]
    fn test_chart_headers_are_preserved() {
        let register = vec![DepreciationRow::new("JCB", "Plant & Machinery", dec!(100))];
        let chart = DepreciationChart::build(&register, &RateTable::standard());

        let mut buffer = Vec::new();
        write_chart(&mut buffer, &chart).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "Asset,Block,Rate (%),Opening WDV,Additions,Deletions,Depreciation,Closing WDV"
        );
        assert!(text.lines().last().unwrap().starts_with("Total"));
    }

    #[test]
    fn test_statement_sides_zip_unevenly() {
        let statement = TwoSidedStatement {
            title: "Trading Account".to_string(),
            left: StatementSide::new(
                "Particulars",
                vec![
                    StatementLine::new("Purchase", dec!(400)),
                    StatementLine::new("Gross Profit c/d", dec!(600)),
                ],
            ),
            right: StatementSide::new(
                "Particulars",
                vec![StatementLine::new("Sales", dec!(1000))],
            ),
        };

        let mut buffer = Vec::new();
        write_statement(&mut buffer, &statement).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Purchase,400,Sales,1000");
        assert_eq!(lines[2], "Gross Profit c/d,600,,");
        assert_eq!(lines[3], "Total,1000,Total,1000");
    }
}
