//! Tests for ledger aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{Category, Ledger, LedgerRow};

fn row(particular: &str, category: Category, amount: Decimal) -> LedgerRow {
    LedgerRow::new(particular, category, amount)
}

proptest! {
    /// Summing by particular is the arithmetic sum of the matching rows,
    /// independent of row order.
    #[test]
    fn test_sum_by_particular_order_independent(
        amounts in prop::collection::vec(-1_000_000i64..1_000_000, 1..20),
        noise in prop::collection::vec(-1_000_000i64..1_000_000, 0..10),
    ) {
        let mut rows: Vec<LedgerRow> = amounts
            .iter()
            .map(|&amount| row("Sales", Category::Trading, Decimal::from(amount)))
            .collect();
        rows.extend(
            noise
                .iter()
                .map(|&amount| row("Rent", Category::IndirectExpense, Decimal::from(amount))),
        );

        let expected: Decimal = amounts.iter().map(|&a| Decimal::from(a)).sum();

        let forward = Ledger::new(rows.clone());
        rows.reverse();
        let backward = Ledger::new(rows);

        prop_assert_eq!(forward.sum_by_particular("Sales"), expected);
        prop_assert_eq!(backward.sum_by_particular("Sales"), expected);
    }

    /// Category sums partition the ledger: each row lands in exactly one
    /// category total.
    #[test]
    fn test_category_sums_partition(
        amounts in prop::collection::vec(-100_000i64..100_000, 1..30),
    ) {
        let categories = [
            Category::Trading,
            Category::IndirectIncome,
            Category::IndirectExpense,
            Category::Liability,
            Category::Asset,
        ];
        let rows: Vec<LedgerRow> = amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| {
                row(&format!("Head {i}"), categories[i % 5], Decimal::from(amount))
            })
            .collect();
        let ledger = Ledger::new(rows);

        let total: Decimal = categories
            .iter()
            .map(|&category| ledger.sum_by_category(category))
            .sum();
        let expected: Decimal = amounts.iter().map(|&a| Decimal::from(a)).sum();

        prop_assert_eq!(total, expected);
    }
}

mod unit_tests {
    use super::*;

    #[test]
    fn test_duplicate_particulars_are_summed() {
        let ledger = Ledger::new(vec![
            row("Sales", Category::Trading, dec!(600)),
            row("Purchase", Category::Trading, dec!(300)),
            row("Sales", Category::Trading, dec!(400)),
        ]);

        assert_eq!(ledger.sum_by_particular("Sales"), dec!(1000));
    }

    #[test]
    fn test_missing_particular_sums_to_zero() {
        let ledger = Ledger::new(vec![row("Sales", Category::Trading, dec!(100))]);

        assert_eq!(ledger.sum_by_particular("Closing Stock"), dec!(0));
    }

    #[test]
    fn test_particular_match_is_case_sensitive() {
        let ledger = Ledger::new(vec![row("Sales", Category::Trading, dec!(100))]);

        assert_eq!(ledger.sum_by_particular("sales"), dec!(0));
    }

    #[test]
    fn test_add_backs_only_count_indirect_expenses() {
        let ledger = Ledger::new(vec![
            row("Depreciation", Category::IndirectExpense, dec!(50)).with_add_back(),
            row("Fixed Assets", Category::Asset, dec!(900)).with_add_back(),
            row("Interest Received", Category::IndirectIncome, dec!(30)).with_add_back(),
            row("Rent", Category::IndirectExpense, dec!(40)),
        ]);

        assert_eq!(ledger.sum_add_backs(), dec!(50));
    }

    #[test]
    fn test_direct_expenses_exclude_named_trading_heads() {
        let ledger = Ledger::new(vec![
            row("Sales", Category::Trading, dec!(1000)),
            row("Opening Stock", Category::Trading, dec!(50)),
            row("Purchase", Category::Trading, dec!(400)),
            row("Closing Stock", Category::Trading, dec!(80)),
            row("Freight Inward", Category::Trading, dec!(15)),
            row("Direct Expenses", Category::Trading, dec!(5)),
            row("Rent", Category::IndirectExpense, dec!(99)),
        ]);

        assert_eq!(ledger.direct_expenses(), dec!(20));
    }

    #[test]
    fn test_with_depreciation_appends_add_back_expense() {
        let ledger = Ledger::new(vec![row("Sales", Category::Trading, dec!(100))]);
        let merged = ledger.with_depreciation(dec!(25));

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.sum_by_category(Category::IndirectExpense), dec!(25));
        assert_eq!(merged.sum_add_backs(), dec!(25));
        // The original ledger is untouched.
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_grouped_preserves_first_appearance_order() {
        let ledger = Ledger::new(vec![
            row("Rent", Category::IndirectExpense, dec!(10)),
            row("Salary", Category::IndirectExpense, dec!(20)),
            row("Rent", Category::IndirectExpense, dec!(5)),
        ]);

        let grouped = ledger.grouped(Category::IndirectExpense);
        assert_eq!(
            grouped,
            vec![("Rent".to_string(), dec!(15)), ("Salary".to_string(), dec!(20))]
        );
    }

    #[test]
    fn test_category_label_round_trip() {
        for category in [
            Category::Trading,
            Category::IndirectIncome,
            Category::IndirectExpense,
            Category::Liability,
            Category::Asset,
        ] {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_category_from_label_rejects_unknown() {
        assert_eq!(Category::from_label("Expenses Misc"), None);
        assert_eq!(Category::from_label(""), None);
    }
}
