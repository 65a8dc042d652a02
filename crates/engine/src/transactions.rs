//! Transaction primitives.
//!
//! A `Transaction` is one row of the remote `transactions` table: a dated,
//! titled amount that is either income or an expense and carries the *name*
//! of its category (not a reference, so rows survive category deletion).

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, Money};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// `+` for income, `-` for expenses, as shown next to amounts.
    pub fn sign(self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidKind(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    /// Always non-negative; the kind defines the direction.
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

impl Transaction {
    /// Amount with the sign implied by the kind.
    #[must_use]
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// The three views of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overall,
    Expense,
    Income,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [Self::Overall, Self::Expense, Self::Income];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overall => "Overall",
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }

    /// Kind of rows shown by the tab; `None` means every row.
    pub fn kind_filter(self) -> Option<TransactionKind> {
        match self {
            Self::Overall => None,
            Self::Expense => Some(TransactionKind::Expense),
            Self::Income => Some(TransactionKind::Income),
        }
    }

    /// Kind of categories managed from the tab. The overall view manages
    /// expense categories.
    pub fn managed_kind(self) -> TransactionKind {
        self.kind_filter().unwrap_or(TransactionKind::Expense)
    }

    pub fn shows(self, tx: &Transaction) -> bool {
        self.kind_filter().is_none_or(|kind| tx.kind == kind)
    }
}

/// Rows visible in `tab`, in fetch order.
pub fn filter_for_tab(rows: &[Transaction], tab: DashboardTab) -> Vec<&Transaction> {
    rows.iter().filter(|tx| tab.shows(tx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: TransactionKind, cents: i64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            amount: Money::new(cents),
            category: "c".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            kind,
        }
    }

    #[test]
    fn kind_round_trips_through_wire_names() {
        assert_eq!(TransactionKind::try_from("income").unwrap(), TransactionKind::Income);
        assert_eq!("expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!(TransactionKind::try_from("refund").is_err());
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"income\""
        );
    }

    #[test]
    fn signed_amount_follows_kind() {
        assert_eq!(tx(TransactionKind::Income, 500).signed_amount(), Money::new(500));
        assert_eq!(tx(TransactionKind::Expense, 500).signed_amount(), Money::new(-500));
    }

    #[test]
    fn tab_filter_keeps_order() {
        let rows = vec![
            tx(TransactionKind::Expense, 1),
            tx(TransactionKind::Income, 2),
            tx(TransactionKind::Expense, 3),
        ];

        let overall = filter_for_tab(&rows, DashboardTab::Overall);
        assert_eq!(overall.len(), 3);

        let expenses: Vec<i64> = filter_for_tab(&rows, DashboardTab::Expense)
            .iter()
            .map(|tx| tx.amount.cents())
            .collect();
        assert_eq!(expenses, vec![1, 3]);

        let income = filter_for_tab(&rows, DashboardTab::Income);
        assert_eq!(income.len(), 1);
    }

    #[test]
    fn overall_tab_manages_expense_categories() {
        assert_eq!(DashboardTab::Overall.managed_kind(), TransactionKind::Expense);
        assert_eq!(DashboardTab::Income.managed_kind(), TransactionKind::Income);
    }
}
