//! State of the "new transaction" form.
//!
//! Every field is kept as the raw text the user typed; parsing happens once,
//! in [`TransactionForm::validate`].

use chrono::NaiveDate;

use crate::{
    Category, EngineError, Money, TransactionKind,
    categories::of_kind,
    date_range::{format_date, parse_date},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Amount,
    Category,
    Date,
}

impl FormField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Title,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionForm {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub kind: TransactionKind,
}

/// A validated form, ready to be inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub title: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    /// The date lies after today. Saving is still allowed; the caller warns.
    pub future_date: bool,
}

impl TransactionForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: String::new(),
            date: format_date(today),
            kind: TransactionKind::Expense,
        }
    }

    /// Switches kind and picks the first category of the new kind.
    pub fn set_kind(&mut self, kind: TransactionKind, categories: &[Category]) {
        self.kind = kind;
        self.category = of_kind(categories, kind)
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default();
    }

    pub fn toggle_kind(&mut self, categories: &[Category]) {
        self.set_kind(self.kind.toggled(), categories);
    }

    /// Re-selects the first category of the current kind when the chosen one
    /// no longer exists (or belongs to the other kind).
    pub fn sync_category(&mut self, categories: &[Category]) {
        let valid = of_kind(categories, self.kind);
        if valid.iter().any(|c| c.name == self.category) {
            return;
        }
        self.category = valid.first().map(|c| c.name.clone()).unwrap_or_default();
    }

    pub fn cycle_category(&mut self, categories: &[Category], forward: bool) {
        let valid = of_kind(categories, self.kind);
        if valid.is_empty() {
            self.category.clear();
            return;
        }
        let len = valid.len();
        let next = match valid.iter().position(|c| c.name == self.category) {
            Some(pos) if forward => (pos + 1) % len,
            Some(pos) => (pos + len - 1) % len,
            None => 0,
        };
        self.category = valid[next].name.clone();
    }

    /// Appends a typed character to the amount.
    ///
    /// Returns `false` (leaving the amount untouched) when the result would not
    /// be a non-negative amount with at most one separator and two decimals.
    pub fn push_amount_char(&mut self, ch: char) -> bool {
        if !(ch.is_ascii_digit() || ch == '.' || ch == ',') {
            return false;
        }
        let mut candidate = self.amount.clone();
        candidate.push(ch);
        if candidate.chars().filter(|c| matches!(c, '.' | ',')).count() > 1 {
            return false;
        }
        if Money::parse_non_negative(&candidate).is_err() {
            return false;
        }
        self.amount = candidate;
        true
    }

    pub fn push_char(&mut self, field: FormField, ch: char) {
        match field {
            FormField::Title => self.title.push(ch),
            FormField::Amount => {
                self.push_amount_char(ch);
            }
            FormField::Date => {
                if ch.is_ascii_digit() || ch == '-' {
                    self.date.push(ch);
                }
            }
            // Picked, not typed.
            FormField::Category => {}
        }
    }

    pub fn pop_char(&mut self, field: FormField) {
        match field {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Date => {
                self.date.pop();
            }
            FormField::Category => {}
        }
    }

    pub fn validate(&self, today: NaiveDate) -> Result<Submission, EngineError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(EngineError::MissingField("title".to_string()));
        }
        if self.amount.trim().is_empty() {
            return Err(EngineError::MissingField("amount".to_string()));
        }
        let amount = Money::parse_non_negative(&self.amount)?;
        if self.category.is_empty() {
            return Err(EngineError::MissingField("category".to_string()));
        }
        if self.date.trim().is_empty() {
            return Err(EngineError::MissingField("date".to_string()));
        }
        let date = parse_date(&self.date)?;

        Ok(Submission {
            title: title.to_string(),
            amount,
            category: self.category.clone(),
            date,
            kind: self.kind,
            future_date: date > today,
        })
    }

    /// Clears title and amount after a successful insert; kind, category and
    /// date are kept for the next entry.
    pub fn reset_after_submit(&mut self) {
        self.title.clear();
        self.amount.clear();
    }
}
