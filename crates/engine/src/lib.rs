//! Domain core of the dashboard: money, transactions, categories and the
//! reductions that turn fetched rows into chart data.
//!
//! Nothing in this crate performs I/O; rows arrive already fetched from the
//! remote tables and validated input leaves as [`Submission`]s.

pub use aggregate::{
    CategorySlice, MonthBucket, SLICE_COLORS, Summary, breakdown_total, category_breakdown,
    monthly_totals, slice_color,
};
pub use categories::{Category, NewCategory, default_categories};
pub use date_range::{DateRange, format_date, parse_date};
pub use error::EngineError;
pub use form::{FormField, Submission, TransactionForm};
pub use money::Money;
pub use transactions::{DashboardTab, Transaction, TransactionKind, filter_for_tab};

pub mod aggregate;
pub mod categories;
mod date_range;
mod error;
mod form;
mod money;
mod transactions;
