//! Database operations for expenses
//!
//! Every query is scoped to the owning user; there is no way to read or
//! remove another user's expense through this module.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{Expense, ExpenseDraft};

/// Store a new expense owned by `user_id`
pub async fn insert_expense(
    pool: &SqlitePool,
    user_id: Uuid,
    draft: &ExpenseDraft,
) -> Result<Expense, sqlx::Error> {
    let expense = Expense {
        id: Uuid::new_v4(),
        user_id,
        title: draft.title.clone(),
        amount: draft.amount,
        category: draft.category.clone(),
        date: draft.date,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO expenses (id, user_id, title, amount, category, date, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(expense.id)
    .bind(expense.user_id)
    .bind(&expense.title)
    .bind(expense.amount)
    .bind(&expense.category)
    .bind(expense.date)
    .bind(expense.created_at)
    .execute(pool)
    .await?;

    Ok(expense)
}

/// All expenses owned by `user_id`, in insertion order
pub async fn list_expenses_for_user(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Vec<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        r#"
        SELECT id, user_id, title, amount, category, date, created_at
        FROM expenses
        WHERE user_id = ?
        ORDER BY rowid
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Delete an expense if, and only if, `user_id` owns it
///
/// # Returns
/// `true` if a row was removed
pub async fn delete_expense_for_user(
    pool: &SqlitePool,
    expense_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM expenses WHERE id = ? AND user_id = ?")
        .bind(expense_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
