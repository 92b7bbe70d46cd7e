//! Statement building and Balance Sheet reconciliation.

pub mod service;
pub mod types;


pub use service::StatementBuilder;
pub use types::{
    FinancialStatements, FirmDetails, StatementLine, StatementResult, StatementSide,
    TwoSidedStatement,
};
