//! CSV layout of the ledger and depreciation-register files.
//!
//! Headers: `particular,category,amount,add_back` for the ledger and
//! `asset_name,block_type,opening_wdv,additions_long,additions_short,deletions`
//! for the register. Numeric cells are parsed permissively: blanks,
//! thousands separators and junk all normalize to zero with a warning,
//! never an error.

use std::io::{Read, Write};
use std::str::FromStr;

use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;
use tracing::warn;

use finstat_core::depreciation::DepreciationRow;
use finstat_core::ledger::{Category, Ledger, LedgerRow};

use crate::error::StoreError;

#[derive(serde::Deserialize)]
struct LedgerCsvRow {
    particular: String,
    category: String,
    amount: Option<String>,
    add_back: Option<String>,
}

#[derive(serde::Serialize)]
struct LedgerCsvOutRow<'a> {
    particular: &'a str,
    category: &'a str,
    amount: String,
    add_back: &'a str,
}

#[derive(serde::Deserialize)]
struct RegisterCsvRow {
    asset_name: String,
    block_type: String,
    opening_wdv: Option<String>,
    additions_long: Option<String>,
    additions_short: Option<String>,
    deletions: Option<String>,
}

#[derive(serde::Serialize)]
struct RegisterCsvOutRow<'a> {
    asset_name: &'a str,
    block_type: &'a str,
    opening_wdv: String,
    additions_long: String,
    additions_short: String,
    deletions: String,
}

/// Reads a ledger file.
pub fn read_ledger<R: Read>(reader: R) -> Result<Ledger, StoreError> {
    let mut csv = ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut rows = Vec::new();

    for record in csv.deserialize::<LedgerCsvRow>() {
        let record = record?;
        let category = Category::from_label(&record.category).unwrap_or_else(|| {
            warn!(
                particular = %record.particular,
                label = %record.category,
                "unknown category label, treating as indirect expense"
            );
            Category::IndirectExpense
        });

        let mut row = LedgerRow::new(
            record.particular,
            category,
            parse_amount(record.amount.as_deref()),
        );
        if parse_flag(record.add_back.as_deref()) {
            row = row.with_add_back();
        }
        rows.push(row);
    }

    Ok(Ledger::new(rows))
}

/// Writes a ledger file.
pub fn write_ledger<W: Write>(writer: W, ledger: &Ledger) -> Result<(), StoreError> {
    let mut csv = WriterBuilder::new().from_writer(writer);
    for row in ledger.rows() {
        csv.serialize(LedgerCsvOutRow {
            particular: &row.particular,
            category: row.category.label(),
            amount: row.amount.to_string(),
            add_back: if row.add_back { "true" } else { "false" },
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Reads a depreciation register file.
pub fn read_register<R: Read>(reader: R) -> Result<Vec<DepreciationRow>, StoreError> {
    let mut csv = ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut rows = Vec::new();

    for record in csv.deserialize::<RegisterCsvRow>() {
        let record = record?;
        rows.push(DepreciationRow {
            asset_name: record.asset_name,
            block_type: record.block_type,
            opening_wdv: parse_amount(record.opening_wdv.as_deref()),
            additions_long: parse_amount(record.additions_long.as_deref()),
            additions_short: parse_amount(record.additions_short.as_deref()),
            deletions: parse_amount(record.deletions.as_deref()),
        });
    }

    Ok(rows)
}

/// Writes a depreciation register file.
pub fn write_register<W: Write>(
    writer: W,
    register: &[DepreciationRow],
) -> Result<(), StoreError> {
    let mut csv = WriterBuilder::new().from_writer(writer);
    for row in register {
        csv.serialize(RegisterCsvOutRow {
            asset_name: &row.asset_name,
            block_type: &row.block_type,
            opening_wdv: row.opening_wdv.to_string(),
            additions_long: row.additions_long.to_string(),
            additions_short: row.additions_short.to_string(),
            deletions: row.deletions.to_string(),
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Parses a currency cell, normalizing anything unusable to zero.
fn parse_amount(cell: Option<&str>) -> Decimal {
    let Some(raw) = cell else {
        return Decimal::ZERO;
    };
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned).unwrap_or_else(|_| {
        warn!(cell = %raw, "unparseable amount, treating as zero");
        Decimal::ZERO
    })
}

fn parse_flag(cell: Option<&str>) -> bool {
    matches!(
        cell.map(|c| c.trim().to_lowercase()).as_deref(),
        Some("true" | "yes" | "y" | "1")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_ledger_round_trip() {
        let mut ledger = Ledger::default();
        ledger.push(LedgerRow::new("Sales", Category::Trading, dec!(1000)));
        ledger.push(
            LedgerRow::new("Preliminary Exp W/off", Category::IndirectExpense, dec!(60))
                .with_add_back(),
        );

        let mut buffer = Vec::new();
        write_ledger(&mut buffer, &ledger).unwrap();
        let reloaded = read_ledger(buffer.as_slice()).unwrap();

        assert_eq!(reloaded, ledger);
    }

    #[test]
    fn test_malformed_amount_normalizes_to_zero() {
        let data = "particular,category,amount,add_back\nSales,Trading,not-a-number,false\n";
        let ledger = read_ledger(data.as_bytes()).unwrap();

        assert_eq!(ledger.rows()[0].amount, dec!(0));
    }

    #[test]
    fn test_blank_amount_normalizes_to_zero() {
        let data = "particular,category,amount,add_back\nSales,Trading,,\n";
        let ledger = read_ledger(data.as_bytes()).unwrap();

        assert_eq!(ledger.rows()[0].amount, dec!(0));
        assert!(!ledger.rows()[0].add_back);
    }

    #[test]
    fn test_thousands_separators_are_accepted() {
        let data = "particular,category,amount,add_back\nSales,Trading,\"1,25,000.50\",false\n";
        let ledger = read_ledger(data.as_bytes()).unwrap();

        assert_eq!(ledger.rows()[0].amount, dec!(125000.50));
    }

    #[test]
    fn test_unknown_category_falls_back_to_expense() {
        let data = "particular,category,amount,add_back\nMystery,Whatever,10,false\n";
        let ledger = read_ledger(data.as_bytes()).unwrap();

        assert_eq!(ledger.rows()[0].category, Category::IndirectExpense);
    }

    #[test]
    fn test_category_aliases() {
        let data = "particular,category,amount,add_back\n\
                    Rent,Expense,10,false\n\
                    Commission,Income,5,false\n\
                    Capital,Liability,100,false\n";
        let ledger = read_ledger(data.as_bytes()).unwrap();

        assert_eq!(ledger.rows()[0].category, Category::IndirectExpense);
        assert_eq!(ledger.rows()[1].category, Category::IndirectIncome);
        assert_eq!(ledger.rows()[2].category, Category::Liability);
    }

    #[test]
    fn test_add_back_flag_spellings() {
        let data = "particular,category,amount,add_back\n\
                    A,Expense,1,true\n\
                    B,Expense,1,Yes\n\
                    C,Expense,1,1\n\
                    D,Expense,1,no\n";
        let ledger = read_ledger(data.as_bytes()).unwrap();

        let flags: Vec<bool> = ledger.rows().iter().map(|r| r.add_back).collect();
        assert_eq!(flags, vec![true, true, true, false]);
    }

    #[test]
    fn test_register_round_trip() {
        let register = vec![DepreciationRow {
            asset_name: "JCB Machine".to_string(),
            block_type: "Plant & Machinery".to_string(),
            opening_wdv: dec!(100000),
            additions_long: dec!(20000),
            additions_short: dec!(5000),
            deletions: dec!(1000),
        }];

        let mut buffer = Vec::new();
        write_register(&mut buffer, &register).unwrap();
        let reloaded = read_register(buffer.as_slice()).unwrap();

        assert_eq!(reloaded, register);
    }
}
