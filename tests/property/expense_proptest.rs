//! Property-based tests for expense input parsing
//!
//! Uses proptest to generate random inputs and verify the parse boundary
//! accepts exactly the positive finite amounts and real calendar dates.

use chrono::NaiveDate;
use expense_tracker::shared::expense::{parse_amount, parse_date};
use expense_tracker::shared::AmountInput;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_positive_amounts_accepted(amount in 0.01f64..1_000_000.0) {
        prop_assert_eq!(parse_amount(Some(&AmountInput::Number(amount))).unwrap(), amount);
        prop_assert_eq!(parse_amount(Some(&AmountInput::Text(amount.to_string()))).unwrap(), amount);
    }

    #[test]
    fn test_non_positive_amounts_rejected(amount in -1_000_000.0f64..=0.0) {
        let err = parse_amount(Some(&AmountInput::Number(amount))).unwrap_err();
        prop_assert_eq!(err.field(), Some("amount"));
    }

    #[test]
    fn test_alphabetic_amounts_rejected(text in "[a-zA-Z ]{1,12}") {
        prop_assert!(parse_amount(Some(&AmountInput::Text(text))).is_err());
    }

    #[test]
    fn test_valid_dates_parse(year in 1970i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let raw = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(parse_date(&raw).unwrap(), date);
    }

    #[test]
    fn test_out_of_range_months_rejected(year in 1970i32..2100, month in 13u32..=99, day in 1u32..=28) {
        let raw = format!("{:04}-{:02}-{:02}", year, month, day);
        prop_assert!(parse_date(&raw).is_err());
    }
}
