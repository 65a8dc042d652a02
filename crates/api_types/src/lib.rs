//! Wire types of the hosted backend: rows of the `transactions` and
//! `categories` tables and the bodies of the auth endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use engine::TransactionKind;

pub mod transaction {
    use chrono::NaiveDate;
    use engine::{EngineError, Money, Submission, Transaction};

    use super::*;

    /// A row of the `transactions` table as returned by `select=*`.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct TransactionRow {
        pub id: Uuid,
        pub title: String,
        /// Major units (e.g. `12.5`).
        pub amount: f64,
        pub category: String,
        pub date: NaiveDate,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        #[serde(default)]
        pub user_id: Option<Uuid>,
    }

    impl TryFrom<TransactionRow> for Transaction {
        type Error = EngineError;

        fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
            Ok(Transaction {
                id: row.id,
                amount: Money::from_major(row.amount)?,
                title: row.title,
                category: row.category,
                date: row.date,
                kind: row.kind,
            })
        }
    }

    /// Body of an insert into `transactions`.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct TransactionInsert {
        pub title: String,
        pub amount: f64,
        pub category: String,
        pub date: NaiveDate,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub user_id: Uuid,
    }

    impl TransactionInsert {
        pub fn from_submission(submission: &Submission, user_id: Uuid) -> Self {
            Self {
                title: submission.title.clone(),
                amount: submission.amount.to_major(),
                category: submission.category.clone(),
                date: submission.date,
                kind: submission.kind,
                user_id,
            }
        }
    }
}

pub mod category {
    use engine::{Category, NewCategory};

    use super::*;

    /// A row of the `categories` table.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct CategoryRow {
        pub id: Uuid,
        pub name: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        #[serde(default)]
        pub user_id: Option<Uuid>,
    }

    impl From<CategoryRow> for Category {
        fn from(row: CategoryRow) -> Self {
            Category {
                id: row.id,
                name: row.name,
                kind: row.kind,
            }
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct CategoryInsert {
        pub name: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub user_id: Uuid,
    }

    impl CategoryInsert {
        pub fn new(category: NewCategory, user_id: Uuid) -> Self {
            Self {
                name: category.name,
                kind: category.kind,
                user_id,
            }
        }
    }

    /// Body of a `PATCH` renaming a category.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct CategoryRename {
        pub name: String,
    }
}

pub mod auth {
    use super::*;

    /// Body of `POST /auth/v1/token?grant_type=password`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct PasswordGrant {
        pub email: String,
        pub password: String,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct User {
        pub id: Uuid,
        #[serde(default)]
        pub email: Option<String>,
    }

    /// A signed-in session. Only the fields the dashboard needs are kept.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Session {
        pub access_token: String,
        pub user: User,
    }
}

pub mod error {
    use super::*;

    /// Error body of the table API (`message`) or of the auth API
    /// (`error_description` / `msg`).
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ApiErrorBody {
        #[serde(default)]
        pub message: Option<String>,
        #[serde(default)]
        pub error_description: Option<String>,
        #[serde(default)]
        pub msg: Option<String>,
        #[serde(default)]
        pub code: Option<String>,
        #[serde(default)]
        pub hint: Option<String>,
    }

    impl ApiErrorBody {
        pub fn text(&self) -> Option<String> {
            self.message
                .clone()
                .or_else(|| self.error_description.clone())
                .or_else(|| self.msg.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use engine::{EngineError, Money, Transaction};

    use super::{
        category::CategoryRow,
        error::ApiErrorBody,
        transaction::{TransactionInsert, TransactionRow},
        *,
    };

    #[test]
    fn transaction_row_reads_type_column() {
        let json = r#"{
            "id": "3f1c1a2e-8d6b-4c0e-9a53-1c2b3d4e5f60",
            "title": "Lunch",
            "amount": 12.5,
            "category": "Food",
            "date": "2026-10-16",
            "type": "expense",
            "user_id": "0b8e2f44-6d3c-4f7b-8d0a-6a5b4c3d2e1f",
            "created_at": "2026-10-16T10:00:00+00:00"
        }"#;
        let row: TransactionRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.kind, TransactionKind::Expense);

        let tx = Transaction::try_from(row).unwrap();
        assert_eq!(tx.amount, Money::new(1250));
        assert_eq!(tx.date.to_string(), "2026-10-16");
    }

    #[test]
    fn out_of_range_amount_is_refused() {
        let json = r#"{
            "id": "3f1c1a2e-8d6b-4c0e-9a53-1c2b3d4e5f60",
            "title": "Typo",
            "amount": 1e300,
            "category": "Food",
            "date": "2026-10-16",
            "type": "expense"
        }"#;
        let row: TransactionRow = serde_json::from_str(json).unwrap();
        assert!(matches!(
            Transaction::try_from(row),
            Err(EngineError::InvalidAmount(_))
        ));
    }

    #[test]
    fn insert_writes_type_and_major_amount() {
        let insert = TransactionInsert {
            title: "Pay".to_string(),
            amount: Money::new(250_000).to_major(),
            category: "Salary".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            kind: TransactionKind::Income,
            user_id: Uuid::nil(),
        };
        let value = serde_json::to_value(&insert).unwrap();
        assert_eq!(value["type"], "income");
        assert_eq!(value["amount"], 2500.0);
        assert_eq!(value["date"], "2026-10-01");
    }

    #[test]
    fn category_row_without_user_id() {
        let json = r#"{"id":"3f1c1a2e-8d6b-4c0e-9a53-1c2b3d4e5f60","name":"Bonus","type":"income"}"#;
        let row: CategoryRow = serde_json::from_str(json).unwrap();
        assert!(row.user_id.is_none());
        assert_eq!(engine::Category::from(row).kind, TransactionKind::Income);
    }

    #[test]
    fn error_body_prefers_table_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"duplicate key","code":"23505"}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("duplicate key"));

        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#)
                .unwrap();
        assert_eq!(body.text().as_deref(), Some("Invalid login credentials"));
    }
}
