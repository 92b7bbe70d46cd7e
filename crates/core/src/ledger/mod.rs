//! Categorized ledger rows and aggregation.

pub mod aggregate;
pub mod types;

#[cfg(test)]
mod tests;

pub use types::{
    CLOSING_STOCK, Category, DEPRECIATION_HEAD, Ledger, LedgerRow, OPENING_STOCK, PURCHASE, SALES,
    TRADING_HEADS,
};
