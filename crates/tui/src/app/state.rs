//! Dashboard state and the transitions that don't touch the network.

use std::time::{Duration, Instant};

use api_types::auth::User;
use chrono::{DateTime, Local, NaiveDate};
use engine::{
    Category, DashboardTab, DateRange, FormField, Transaction, TransactionForm, TransactionKind,
    categories::of_kind, filter_for_tab, format_date,
};
use uuid::Uuid;

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub message: Option<String>,
}

/// Which part of the dashboard receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Form,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeField {
    Start,
    End,
}

#[derive(Debug)]
pub struct RangeEditState {
    pub start: String,
    pub end: String,
    pub field: RangeField,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Warning,
    Success,
}

#[derive(Debug)]
pub struct AlertModal {
    pub title: String,
    pub message: String,
    pub level: AlertLevel,
}

/// What a confirmed dialog does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteTransaction(Uuid),
    DeleteCategory(Uuid),
}

#[derive(Debug)]
pub struct ConfirmModal {
    pub title: String,
    pub message: String,
    pub action: PendingAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryMode {
    List,
    New,
    Rename(Uuid),
}

#[derive(Debug)]
pub struct CategoryModal {
    pub kind: TransactionKind,
    pub mode: CategoryMode,
    pub selected: usize,
    pub input: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub login: LoginState,
    pub user: Option<User>,
    pub tab: DashboardTab,
    pub focus: Focus,
    pub range: DateRange,
    pub range_edit: RangeEditState,
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub selected: usize,
    pub form: TransactionForm,
    pub form_field: FormField,
    pub form_error: Option<String>,
    pub category_modal: Option<CategoryModal>,
    pub alert: Option<AlertModal>,
    pub confirm: Option<ConfirmModal>,
    pub toast: Option<ToastState>,
    pub help: bool,
    pub last_refresh: Option<DateTime<Local>>,
    pub connection_ok: bool,
    pub base_url: String,
}

impl AppState {
    pub fn new(base_url: &str, email: &str, today: NaiveDate) -> Self {
        let range = DateRange::month_to_date(today);
        Self {
            screen: Screen::Login,
            login: LoginState {
                email: email.to_string(),
                password: String::new(),
                focus: if email.is_empty() {
                    LoginField::Email
                } else {
                    LoginField::Password
                },
                message: None,
            },
            user: None,
            tab: DashboardTab::Overall,
            focus: Focus::Table,
            range,
            range_edit: RangeEditState {
                start: format_date(range.start()),
                end: format_date(range.end()),
                field: RangeField::Start,
                error: None,
            },
            transactions: Vec::new(),
            categories: Vec::new(),
            selected: 0,
            form: TransactionForm::new(today),
            form_field: FormField::Title,
            form_error: None,
            category_modal: None,
            alert: None,
            confirm: None,
            toast: None,
            help: false,
            last_refresh: None,
            connection_ok: true,
            base_url: base_url.to_string(),
        }
    }

    /// Drops everything tied to the signed-in user.
    pub fn sign_out(&mut self, today: NaiveDate) {
        self.screen = Screen::Login;
        self.user = None;
        self.login.password.clear();
        self.login.focus = LoginField::Password;
        self.transactions.clear();
        self.categories.clear();
        self.selected = 0;
        self.form = TransactionForm::new(today);
        self.form_field = FormField::Title;
        self.form_error = None;
        self.focus = Focus::Table;
        self.category_modal = None;
        self.confirm = None;
        self.alert = None;
        self.last_refresh = None;
    }

    pub fn visible_transactions(&self) -> Vec<&Transaction> {
        filter_for_tab(&self.transactions, self.tab)
    }

    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.visible_transactions().get(self.selected).copied()
    }

    pub fn set_tab(&mut self, tab: DashboardTab) {
        if self.tab != tab {
            self.tab = tab;
            self.selected = 0;
        }
    }

    pub fn next_tab(&mut self, forward: bool) {
        let tabs = DashboardTab::ALL;
        let pos = tabs.iter().position(|t| *t == self.tab).unwrap_or(0);
        let next = if forward {
            (pos + 1) % tabs.len()
        } else {
            (pos + tabs.len() - 1) % tabs.len()
        };
        self.set_tab(tabs[next]);
    }

    pub fn select_next(&mut self) {
        let len = self.visible_transactions().len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Replaces the fetched rows and keeps selection and form consistent.
    pub fn set_data(&mut self, transactions: Vec<Transaction>, categories: Vec<Category>) {
        self.transactions = transactions;
        self.categories = categories;
        self.clamp_selection();
        self.form.sync_category(&self.categories);
        if let Some(modal) = &mut self.category_modal {
            let len = of_kind(&self.categories, modal.kind).len();
            modal.selected = modal.selected.min(len.saturating_sub(1));
        }
    }

    pub fn remove_transaction(&mut self, id: Uuid) {
        self.transactions.retain(|tx| tx.id != id);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_transactions().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn show_alert(&mut self, title: &str, message: &str, level: AlertLevel) {
        self.alert = Some(AlertModal {
            title: title.to_string(),
            message: message.to_string(),
            level,
        });
    }

    pub fn show_confirm(&mut self, title: &str, message: &str, action: PendingAction) {
        self.confirm = Some(ConfirmModal {
            title: title.to_string(),
            message: message.to_string(),
            action,
        });
    }

    pub fn show_toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toast = Some(ToastState {
            message: message.into(),
            level,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.expires_at <= now) {
            self.toast = None;
        }
    }

    pub fn ask_delete_selected_transaction(&mut self) {
        let Some(id) = self.selected_transaction().map(|tx| tx.id) else {
            return;
        };
        self.show_confirm(
            "Delete transaction",
            "Delete this transaction? This cannot be undone.",
            PendingAction::DeleteTransaction(id),
        );
    }

    /// Opens the category list of the active tab; the overall tab manages
    /// expense categories.
    pub fn open_category_modal(&mut self) {
        self.category_modal = Some(CategoryModal {
            kind: self.tab.managed_kind(),
            mode: CategoryMode::List,
            selected: 0,
            input: String::new(),
            error: None,
        });
    }

    pub fn modal_categories(&self) -> Vec<&Category> {
        match &self.category_modal {
            Some(modal) => of_kind(&self.categories, modal.kind),
            None => Vec::new(),
        }
    }

    pub fn selected_modal_category(&self) -> Option<&Category> {
        let modal = self.category_modal.as_ref()?;
        self.modal_categories().get(modal.selected).copied()
    }

    pub fn modal_select(&mut self, forward: bool) {
        let len = self.modal_categories().len();
        let Some(modal) = &mut self.category_modal else {
            return;
        };
        if len == 0 {
            modal.selected = 0;
        } else if forward {
            modal.selected = (modal.selected + 1).min(len - 1);
        } else {
            modal.selected = modal.selected.saturating_sub(1);
        }
    }

    pub fn start_category_rename(&mut self) {
        let Some((id, name)) = self
            .selected_modal_category()
            .map(|c| (c.id, c.name.clone()))
        else {
            return;
        };
        if let Some(modal) = &mut self.category_modal {
            modal.mode = CategoryMode::Rename(id);
            modal.input = name;
            modal.error = None;
        }
    }

    pub fn start_category_new(&mut self) {
        if let Some(modal) = &mut self.category_modal {
            modal.mode = CategoryMode::New;
            modal.input.clear();
            modal.error = None;
        }
    }

    pub fn ask_delete_selected_category(&mut self) {
        let Some(id) = self.selected_modal_category().map(|c| c.id) else {
            return;
        };
        self.show_confirm(
            "Delete category",
            "Delete this category? Existing transactions keep it, but it can no longer be picked.",
            PendingAction::DeleteCategory(id),
        );
    }

    pub fn start_range_edit(&mut self) {
        self.range_edit = RangeEditState {
            start: format_date(self.range.start()),
            end: format_date(self.range.end()),
            field: RangeField::Start,
            error: None,
        };
        self.focus = Focus::Range;
    }

    pub fn range_field_mut(&mut self) -> &mut String {
        match self.range_edit.field {
            RangeField::Start => &mut self.range_edit.start,
            RangeField::End => &mut self.range_edit.end,
        }
    }

    pub fn toggle_range_field(&mut self) {
        self.range_edit.field = match self.range_edit.field {
            RangeField::Start => RangeField::End,
            RangeField::End => RangeField::Start,
        };
    }

    /// Applies the edited bounds. Returns `true` when they were valid and
    /// rows must be fetched again, even if the range is unchanged; on
    /// invalid input the old range stays.
    pub fn apply_range_edit(&mut self) -> bool {
        match DateRange::parse(&self.range_edit.start, &self.range_edit.end) {
            Ok(range) => {
                if range != self.range {
                    self.selected = 0;
                }
                self.range = range;
                self.range_edit.error = None;
                self.focus = Focus::Table;
                true
            }
            Err(err) => {
                self.range_edit.error = Some(err.to_string());
                false
            }
        }
    }
}
