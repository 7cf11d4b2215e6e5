//! Expense records
//!
//! `Expense` is the stored record as it travels over the wire. User input
//! arrives as a `CreateExpenseRequest` and must pass through
//! [`ExpenseDraft::parse`] before anything is persisted; the desktop client
//! runs the same parse before submitting its form.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Category labels offered by the client form
pub const CATEGORIES: [&str; 7] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Utilities",
    "Health",
    "Other",
];

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Expense {
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: String,
    /// Calendar date of the expense, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Amount as sent by a client: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

/// Body of `POST /api/expenses`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
}

/// Body of a successful `DELETE /api/expenses/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// A validated expense, ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    /// Parse and validate raw input, failing on the first bad field
    pub fn parse(request: &CreateExpenseRequest) -> Result<Self, SharedError> {
        let title = required(&request.title, "title", "Title is required")?;
        let amount = parse_amount(request.amount.as_ref())?;
        let category = required(&request.category, "category", "Category is required")?;
        let date = parse_date(&request.date)?;

        Ok(Self {
            title,
            amount,
            category,
            date,
        })
    }
}

impl From<&ExpenseDraft> for CreateExpenseRequest {
    fn from(draft: &ExpenseDraft) -> Self {
        Self {
            title: draft.title.clone(),
            amount: Some(AmountInput::Number(draft.amount)),
            category: draft.category.clone(),
            date: draft.date.format("%Y-%m-%d").to_string(),
        }
    }
}

fn required(raw: &str, field: &str, message: &str) -> Result<String, SharedError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(SharedError::validation(field, message));
    }
    Ok(value.to_string())
}

/// Parse an amount; must be a finite number greater than zero
pub fn parse_amount(input: Option<&AmountInput>) -> Result<f64, SharedError> {
    let amount = match input {
        None => return Err(SharedError::validation("amount", "Amount is required")),
        Some(AmountInput::Number(value)) => *value,
        Some(AmountInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(SharedError::validation("amount", "Amount is required"));
            }
            text.parse::<f64>()
                .map_err(|_| SharedError::validation("amount", "Amount must be a number"))?
        }
    };

    if !amount.is_finite() {
        return Err(SharedError::validation("amount", "Amount must be a number"));
    }
    if amount <= 0.0 {
        return Err(SharedError::validation(
            "amount",
            "Amount must be greater than zero",
        ));
    }
    Ok(amount)
}

/// Parse a date given as `YYYY-MM-DD` or as an RFC 3339 timestamp
pub fn parse_date(raw: &str) -> Result<NaiveDate, SharedError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SharedError::validation("date", "Date is required"));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| SharedError::validation("date", "Date must be formatted as YYYY-MM-DD"))
}
