//! Expense aggregation
//!
//! Everything the dashboard's sidebar and charts display is derived here from
//! the full in-memory expense list. The functions are recomputed on every
//! frame, which is fine for a personal ledger but not meant for large sets.

use chrono::Datelike;

use crate::shared::expense::Expense;

/// Short month labels for the monthly chart
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One category's slice of the total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    /// Fraction of the overall total in `0.0..=1.0`
    pub share: f64,
}

impl CategoryShare {
    /// Share as a whole percentage, rounded half away from zero
    pub fn percent(&self) -> u32 {
        (self.share * 100.0).round() as u32
    }
}

/// Sidebar overview of an expense list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseSummary {
    pub total: f64,
    pub count: usize,
    /// Categories sorted by total, largest first
    pub categories: Vec<CategoryShare>,
}

/// Sum amounts per category, in the order categories are first seen
pub fn category_totals(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|(category, _)| *category == expense.category) {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category.clone(), expense.amount)),
        }
    }
    totals
}

/// Build the sidebar overview
pub fn summarize(expenses: &[Expense]) -> ExpenseSummary {
    let total: f64 = expenses.iter().map(|e| e.amount).sum();

    let mut categories: Vec<CategoryShare> = category_totals(expenses)
        .into_iter()
        .map(|(category, category_total)| CategoryShare {
            share: if total > 0.0 { category_total / total } else { 0.0 },
            category,
            total: category_total,
        })
        .collect();
    categories.sort_by(|a, b| b.total.total_cmp(&a.total));

    ExpenseSummary {
        total,
        count: expenses.len(),
        categories,
    }
}

/// Sum amounts per month of year (January at index 0), across all years
pub fn monthly_totals(expenses: &[Expense]) -> [f64; 12] {
    let mut months = [0.0; 12];
    for expense in expenses {
        let index = expense.date.month0() as usize;
        if let Some(slot) = months.get_mut(index) {
            *slot += expense.amount;
        }
    }
    months
}

/// Format an amount as Indian rupees, e.g. `₹1,234.50`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}₹{}.{:02}", sign, grouped, cents % 100)
}
