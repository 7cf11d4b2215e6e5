//! Expense builders shared by the property and client tests

use chrono::{NaiveDate, Utc};
use expense_tracker::shared::Expense;
use uuid::Uuid;

/// An expense owned by nobody in particular
pub fn expense(title: &str, amount: f64, category: &str, date: NaiveDate) -> Expense {
    Expense {
        id: Uuid::new_v4(),
        user_id: Uuid::nil(),
        title: title.to_string(),
        amount,
        category: category.to_string(),
        date,
        created_at: Utc::now(),
    }
}

/// `NaiveDate` shorthand for fixtures
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}
