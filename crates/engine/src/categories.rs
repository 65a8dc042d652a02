//! Category registry of a user.
//!
//! Categories are per kind: an expense category can't be picked for income.
//! Transactions reference categories by name, so renaming or deleting a
//! category leaves existing rows untouched.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, TransactionKind};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub kind: TransactionKind,
}

/// A category that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub kind: TransactionKind,
}

impl NewCategory {
    /// Validates a user-typed name.
    pub fn parse(name: &str, kind: TransactionKind) -> Result<Self, EngineError> {
        Ok(Self {
            name: category_name(name)?,
            kind,
        })
    }
}

/// Categories seeded when a user has none yet.
pub fn default_categories() -> Vec<NewCategory> {
    [
        ("Food", TransactionKind::Expense),
        ("Transport", TransactionKind::Expense),
        ("Supplies", TransactionKind::Expense),
        ("Salary", TransactionKind::Income),
        ("Bonus", TransactionKind::Income),
    ]
    .into_iter()
    .map(|(name, kind)| NewCategory {
        name: name.to_string(),
        kind,
    })
    .collect()
}

pub fn of_kind(categories: &[Category], kind: TransactionKind) -> Vec<&Category> {
    categories.iter().filter(|c| c.kind == kind).collect()
}

/// Trims the name and rejects empty ones.
pub fn category_name(input: &str) -> Result<String, EngineError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(EngineError::MissingField("category name".to_string()));
    }
    Ok(name.to_string())
}

/// Returns the new name when a rename actually changes something.
pub fn rename_target(current: &str, input: &str) -> Option<String> {
    let name = category_name(input).ok()?;
    (name != current).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_both_kinds() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), 5);
        assert_eq!(
            defaults
                .iter()
                .filter(|c| c.kind == TransactionKind::Income)
                .count(),
            2
        );
        assert_eq!(defaults[0].name, "Food");
    }

    #[test]
    fn names_are_trimmed_and_required() {
        assert_eq!(category_name("  Rent ").unwrap(), "Rent");
        assert_eq!(
            category_name("   "),
            Err(EngineError::MissingField("category name".to_string()))
        );
        let new = NewCategory::parse(" Gifts", TransactionKind::Income).unwrap();
        assert_eq!(new.name, "Gifts");
    }

    #[test]
    fn rename_skips_noops() {
        assert_eq!(rename_target("Food", "Food"), None);
        assert_eq!(rename_target("Food", "  "), None);
        assert_eq!(rename_target("Food", " Groceries "), Some("Groceries".to_string()));
    }

    #[test]
    fn of_kind_filters() {
        let cats = vec![
            Category {
                id: Uuid::new_v4(),
                name: "Food".to_string(),
                kind: TransactionKind::Expense,
            },
            Category {
                id: Uuid::new_v4(),
                name: "Salary".to_string(),
                kind: TransactionKind::Income,
            },
        ];
        let income = of_kind(&cats, TransactionKind::Income);
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].name, "Salary");
    }
}
