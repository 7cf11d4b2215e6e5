//! Property-based tests for expense aggregation
//!
//! Uses proptest to generate random expense lists and verify the sidebar and
//! chart numbers stay consistent with each other.

use expense_tracker::shared::summary::{category_totals, monthly_totals, summarize};
use expense_tracker::shared::{Expense, CATEGORIES};
use proptest::prelude::*;

use crate::common::{expense, ymd};

fn arb_expense() -> impl Strategy<Value = Expense> {
    (
        0..CATEGORIES.len(),
        1u32..=1_000_000,
        2020i32..=2026,
        1u32..=12,
        1u32..=28,
    )
        .prop_map(|(category, cents, year, month, day)| {
            expense("item", cents as f64 / 100.0, CATEGORIES[category], ymd(year, month, day))
        })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn test_total_is_sum_of_amounts(expenses in prop::collection::vec(arb_expense(), 0..40)) {
        let summary = summarize(&expenses);
        let sum: f64 = expenses.iter().map(|e| e.amount).sum();

        prop_assert_eq!(summary.count, expenses.len());
        prop_assert!(close(summary.total, sum));
    }

    #[test]
    fn test_category_totals_add_up(expenses in prop::collection::vec(arb_expense(), 0..40)) {
        let summary = summarize(&expenses);
        let by_category: f64 = summary.categories.iter().map(|c| c.total).sum();

        prop_assert!(close(by_category, summary.total));
        prop_assert_eq!(summary.categories.len(), category_totals(&expenses).len());
    }

    #[test]
    fn test_shares_sum_to_one(expenses in prop::collection::vec(arb_expense(), 1..40)) {
        let summary = summarize(&expenses);
        let shares: f64 = summary.categories.iter().map(|c| c.share).sum();

        prop_assert!(close(shares, 1.0));
        for category in &summary.categories {
            prop_assert!(category.share > 0.0 && category.share <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_categories_sorted_descending(expenses in prop::collection::vec(arb_expense(), 0..40)) {
        let summary = summarize(&expenses);
        for pair in summary.categories.windows(2) {
            prop_assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_monthly_totals_match_total(expenses in prop::collection::vec(arb_expense(), 0..40)) {
        let months = monthly_totals(&expenses);
        let by_month: f64 = months.iter().sum();

        prop_assert!(close(by_month, summarize(&expenses).total));
        prop_assert!(months.iter().all(|m| *m >= 0.0));
    }
}
