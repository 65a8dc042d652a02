//! Chart-ready reductions over the fetched rows.
//!
//! Every function here is a single pass over an in-memory slice; nothing is
//! cached because the rows are replaced wholesale on every refetch. Sums
//! saturate at the `Money` bounds rather than overflow.

use std::collections::BTreeMap;

use crate::{Money, Transaction, TransactionKind};

/// Palette cycled over category slices, as RGB triples.
pub const SLICE_COLORS: [(u8, u8, u8); 7] = [
    (0x00, 0x88, 0xFE),
    (0x00, 0xC4, 0x9F),
    (0xFF, 0xBB, 0x28),
    (0xFF, 0x80, 0x42),
    (0xAF, 0x19, 0xFF),
    (0xFF, 0x55, 0x55),
    (0xA0, 0xA0, 0xA0),
];

pub fn slice_color(index: usize) -> (u8, u8, u8) {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Totals shown on the overall tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub income: Money,
    pub expense: Money,
}

impl Summary {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut summary = Self::default();
        for tx in rows {
            match tx.kind {
                TransactionKind::Income => summary.income += tx.amount,
                TransactionKind::Expense => summary.expense += tx.amount,
            }
        }
        summary
    }

    /// Income minus expenses; negative when overspent.
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySlice {
    pub name: String,
    pub value: Money,
}

impl CategorySlice {
    /// Integer percentage of `total`, rounded half away from zero.
    pub fn share(&self, total: Money) -> u16 {
        if total.is_zero() {
            return 0;
        }
        ((self.value.cents() as f64 / total.cents() as f64) * 100.0).round() as u16
    }
}

/// Sums rows of `kind` per category name, in order of first appearance.
pub fn category_breakdown(rows: &[Transaction], kind: TransactionKind) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    for tx in rows.iter().filter(|tx| tx.kind == kind) {
        match slices.iter_mut().find(|slice| slice.name == tx.category) {
            Some(slice) => slice.value += tx.amount,
            None => slices.push(CategorySlice {
                name: tx.category.clone(),
                value: tx.amount,
            }),
        }
    }
    slices
}

pub fn breakdown_total(slices: &[CategorySlice]) -> Money {
    slices.iter().map(|slice| slice.value).sum()
}

/// Income and expenses of one calendar month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthBucket {
    /// `YYYY-MM`.
    pub month: String,
    pub income: Money,
    pub expense: Money,
}

/// Groups every row by year-month, ascending.
pub fn monthly_totals(rows: &[Transaction]) -> Vec<MonthBucket> {
    let mut grouped: BTreeMap<String, MonthBucket> = BTreeMap::new();
    for tx in rows {
        let month = tx.date.format("%Y-%m").to_string();
        let bucket = grouped
            .entry(month.clone())
            .or_insert_with(|| MonthBucket {
                month,
                income: Money::ZERO,
                expense: Money::ZERO,
            });
        match tx.kind {
            TransactionKind::Income => bucket.income += tx.amount,
            TransactionKind::Expense => bucket.expense += tx.amount,
        }
    }
    grouped.into_values().collect()
}
