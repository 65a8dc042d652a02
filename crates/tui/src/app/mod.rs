mod state;

use std::time::{Duration, Instant};

use api_types::{category::CategoryInsert, transaction::TransactionInsert};
use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEvent};
use engine::{
    Category, DashboardTab, NewCategory, Transaction, categories::rename_target,
    default_categories,
};
use uuid::Uuid;

use crate::{
    client::{Client, ClientError, ClientResult},
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use state::{
    AlertLevel, AppState, CategoryMode, Focus, LoginField, PendingAction, RangeField, Screen,
    ToastLevel, ToastState,
};

pub struct App {
    client: Client,
    pub state: AppState,
    should_quit: bool,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url, &config.api_key)?;
        let state = AppState::new(&config.base_url, &config.email, today());
        Ok(Self {
            client,
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.state.expire_toast(Instant::now());
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key).await;
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }
        match self.state.screen {
            Screen::Login => self.handle_login_key(action).await,
            Screen::Dashboard => self.handle_dashboard_key(action).await,
        }
    }

    async fn handle_login_key(&mut self, action: AppAction) {
        let login = &mut self.state.login;
        match action {
            AppAction::NextField | AppAction::Up | AppAction::Down => {
                login.focus = match login.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
            }
            AppAction::Backspace => {
                active_login_field(login).pop();
            }
            AppAction::Input(ch) => active_login_field(login).push(ch),
            AppAction::Cancel => self.should_quit = true,
            AppAction::Submit => self.attempt_login().await,
            _ => {}
        }
    }

    async fn handle_dashboard_key(&mut self, action: AppAction) {
        if self.state.confirm.is_some() {
            return self.handle_confirm_key(action).await;
        }
        if self.state.alert.is_some() {
            if matches!(action, AppAction::Submit | AppAction::Cancel | AppAction::Input('y')) {
                self.state.alert = None;
            }
            return;
        }
        if self.state.help {
            if matches!(action, AppAction::Cancel | AppAction::Submit | AppAction::Input('?')) {
                self.state.help = false;
            }
            return;
        }
        if self.state.category_modal.is_some() {
            return self.handle_category_key(action).await;
        }

        match self.state.focus {
            Focus::Range => self.handle_range_key(action).await,
            Focus::Form => self.handle_form_key(action).await,
            Focus::Table => self.handle_table_key(action).await,
        }
    }

    async fn handle_confirm_key(&mut self, action: AppAction) {
        match action {
            AppAction::Submit | AppAction::Input('y') => {
                if let Some(confirm) = self.state.confirm.take() {
                    self.execute(confirm.action).await;
                }
            }
            AppAction::Cancel | AppAction::Input('n') => self.state.confirm = None,
            _ => {}
        }
    }

    async fn handle_range_key(&mut self, action: AppAction) {
        match action {
            AppAction::NextField => self.state.toggle_range_field(),
            AppAction::Backspace => {
                self.state.range_field_mut().pop();
            }
            AppAction::Input(ch) if ch.is_ascii_digit() || ch == '-' => {
                self.state.range_field_mut().push(ch);
            }
            AppAction::Submit => {
                let previous = self.state.range;
                if self.state.apply_range_edit() {
                    if self.state.range != previous {
                        tracing::info!("date range set to {}", self.state.range);
                    }
                    self.fetch_data().await;
                }
            }
            AppAction::Cancel => {
                self.state.range_edit.error = None;
                self.state.focus = Focus::Table;
            }
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, action: AppAction) {
        let field = self.state.form_field;
        let state = &mut self.state;
        match action {
            AppAction::NextField => state.form_field = field.next(),
            AppAction::Left | AppAction::Right => state.form.toggle_kind(&state.categories),
            AppAction::Up => state.form.cycle_category(&state.categories, false),
            AppAction::Down => state.form.cycle_category(&state.categories, true),
            AppAction::Backspace => state.form.pop_char(field),
            AppAction::Input(ch) => state.form.push_char(field, ch),
            AppAction::Cancel => {
                state.form_error = None;
                state.focus = Focus::Table;
            }
            AppAction::Submit => self.submit_form().await,
            _ => {}
        }
    }

    async fn handle_table_key(&mut self, action: AppAction) {
        match action {
            AppAction::Up | AppAction::Input('k') => self.state.select_prev(),
            AppAction::Down | AppAction::Input('j') => self.state.select_next(),
            AppAction::Left => self.state.next_tab(false),
            AppAction::Right | AppAction::NextField => self.state.next_tab(true),
            AppAction::Input(ch) => self.handle_table_char(ch).await,
            _ => {}
        }
    }

    async fn handle_table_char(&mut self, ch: char) {
        match ch {
            'o' => self.state.set_tab(DashboardTab::Overall),
            'e' => self.state.set_tab(DashboardTab::Expense),
            'i' => self.state.set_tab(DashboardTab::Income),
            'd' => self.state.start_range_edit(),
            'a' => {
                self.state.form.sync_category(&self.state.categories);
                self.state.focus = Focus::Form;
            }
            'x' => self.state.ask_delete_selected_transaction(),
            'c' => self.state.open_category_modal(),
            'r' => self.fetch_data().await,
            'L' => self.logout().await,
            '?' => self.state.help = true,
            'q' => self.should_quit = true,
            _ => {}
        }
    }

    async fn handle_category_key(&mut self, action: AppAction) {
        let Some(mode) = self.state.category_modal.as_ref().map(|m| m.mode) else {
            return;
        };

        if mode == CategoryMode::List {
            match action {
                AppAction::Up => self.state.modal_select(false),
                AppAction::Down => self.state.modal_select(true),
                AppAction::Input('n') => self.state.start_category_new(),
                AppAction::Input('r') => self.state.start_category_rename(),
                AppAction::Input('x') => self.state.ask_delete_selected_category(),
                AppAction::Cancel | AppAction::Input('c' | 'q') => {
                    self.state.category_modal = None;
                }
                _ => {}
            }
            return;
        }

        match action {
            AppAction::Submit => self.save_category().await,
            AppAction::Cancel => {
                if let Some(modal) = &mut self.state.category_modal {
                    modal.mode = CategoryMode::List;
                    modal.input.clear();
                    modal.error = None;
                }
            }
            AppAction::Backspace => {
                if let Some(modal) = &mut self.state.category_modal {
                    modal.input.pop();
                }
            }
            AppAction::Input(ch) => {
                if let Some(modal) = &mut self.state.category_modal {
                    modal.input.push(ch);
                }
            }
            _ => {}
        }
    }

    async fn attempt_login(&mut self) {
        let email = self.state.login.email.trim().to_string();
        let password = self.state.login.password.clone();
        if email.is_empty() || password.is_empty() {
            self.state.login.message = Some("Enter email and password.".to_string());
            return;
        }

        match self.client.sign_in(&email, &password).await {
            Ok(session) => {
                tracing::info!("signed in as {}", session.user.id);
                self.client.set_access_token(Some(session.access_token));
                self.state.user = Some(session.user);
                self.state.screen = Screen::Dashboard;
                self.state.login.message = None;
                self.state.login.password.clear();
                self.state.connection_ok = true;
                self.fetch_data().await;
            }
            Err(err) => {
                tracing::warn!("sign in failed: {err}");
                self.state.login.message = Some(login_message_for_error(err));
            }
        }
    }

    async fn logout(&mut self) {
        if let Err(err) = self.client.sign_out().await {
            tracing::warn!("sign out failed: {err}");
        }
        self.client.set_access_token(None);
        self.state.sign_out(today());
        tracing::info!("signed out");
    }

    /// Reloads rows and categories for the current user and range.
    async fn fetch_data(&mut self) {
        match self.load().await {
            Ok((transactions, categories)) => {
                tracing::debug!(
                    "loaded {} transactions and {} categories for {}",
                    transactions.len(),
                    categories.len(),
                    self.state.range
                );
                self.state.set_data(transactions, categories);
                self.state.last_refresh = Some(Local::now());
                self.state.connection_ok = true;
            }
            Err(err) => self.report(err),
        }
    }

    async fn load(&mut self) -> ClientResult<(Vec<Transaction>, Vec<Category>)> {
        let user = self.client.current_user().await?;
        let user_id = user.id;
        self.state.user = Some(user);

        let rows = self.client.transactions_in_range(&self.state.range).await?;
        let mut categories = self.client.categories_list().await?;
        if categories.is_empty() {
            tracing::info!("no categories for {user_id}, seeding defaults");
            let defaults: Vec<CategoryInsert> = default_categories()
                .into_iter()
                .map(|category| CategoryInsert::new(category, user_id))
                .collect();
            self.client.categories_insert(&defaults).await?;
            categories = self.client.categories_list().await?;
        }

        let fetched = rows.len();
        let transactions: Vec<Transaction> = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                Transaction::try_from(row)
                    .inspect_err(|err| tracing::warn!("skipping transaction {id}: {err}"))
                    .ok()
            })
            .collect();
        let skipped = fetched - transactions.len();
        if skipped > 0 {
            self.state.show_toast(
                format!("Skipped {skipped} transaction(s) with an unreadable amount"),
                ToastLevel::Info,
            );
        }
        Ok((
            transactions,
            categories.into_iter().map(Category::from).collect(),
        ))
    }

    fn user_id(&self) -> Option<Uuid> {
        self.state.user.as_ref().map(|user| user.id)
    }

    async fn submit_form(&mut self) {
        let submission = match self.state.form.validate(today()) {
            Ok(submission) => submission,
            Err(err) => {
                self.state.form_error = Some(err.to_string());
                return;
            }
        };
        let Some(user_id) = self.user_id() else {
            return self.report(ClientError::Unauthorized);
        };

        let row = TransactionInsert::from_submission(&submission, user_id);
        match self.client.transaction_insert(&row).await {
            Ok(_) => {
                tracing::info!(
                    "saved {} of {} on {}",
                    submission.kind,
                    submission.amount,
                    submission.date
                );
                self.state.form.reset_after_submit();
                self.state.form_field = engine::FormField::Title;
                self.state.form_error = None;
                if submission.future_date {
                    self.state.show_alert(
                        "Future date",
                        "The date is after today. The transaction was saved anyway.",
                        AlertLevel::Warning,
                    );
                } else {
                    self.state.show_toast("Transaction saved", ToastLevel::Success);
                }
                self.fetch_data().await;
            }
            Err(err) => self.report(err),
        }
    }

    async fn execute(&mut self, action: PendingAction) {
        match action {
            PendingAction::DeleteTransaction(id) => {
                match self.client.transaction_delete(id).await {
                    Ok(()) => {
                        tracing::info!("deleted transaction {id}");
                        self.state.remove_transaction(id);
                        self.state.show_toast("Transaction deleted", ToastLevel::Success);
                    }
                    Err(err) => self.report(err),
                }
            }
            PendingAction::DeleteCategory(id) => match self.client.category_delete(id).await {
                Ok(()) => {
                    tracing::info!("deleted category {id}");
                    self.state.show_toast("Category deleted", ToastLevel::Success);
                    self.fetch_data().await;
                }
                Err(err) => self.report(err),
            },
        }
    }

    async fn save_category(&mut self) {
        let Some(modal) = &self.state.category_modal else {
            return;
        };
        let (kind, mode, input) = (modal.kind, modal.mode, modal.input.clone());
        let Some(user_id) = self.user_id() else {
            return self.report(ClientError::Unauthorized);
        };

        let result = match mode {
            CategoryMode::List => return,
            CategoryMode::New => {
                let category = match NewCategory::parse(&input, kind) {
                    Ok(category) => category,
                    Err(err) => return self.set_modal_error(err.to_string()),
                };
                self.client
                    .categories_insert(&[CategoryInsert::new(category, user_id)])
                    .await
            }
            CategoryMode::Rename(id) => {
                let current = self
                    .state
                    .categories
                    .iter()
                    .find(|category| category.id == id)
                    .map(|category| category.name.clone())
                    .unwrap_or_default();
                let Some(name) = rename_target(&current, &input) else {
                    return self.close_modal_editor();
                };
                self.client.category_rename(id, &name).await
            }
        };

        match result {
            Ok(()) => {
                tracing::info!("saved {kind} category");
                self.close_modal_editor();
                if mode == CategoryMode::New {
                    self.state.show_alert(
                        "Category added",
                        &format!("\"{}\" can now be picked in the form.", input.trim()),
                        AlertLevel::Success,
                    );
                }
                self.fetch_data().await;
            }
            Err(ClientError::Conflict(_)) => {
                self.set_modal_error("A category with that name already exists.".to_string());
            }
            Err(ClientError::Validation(message)) => self.set_modal_error(message),
            Err(err) => self.report(err),
        }
    }

    fn set_modal_error(&mut self, message: String) {
        if let Some(modal) = &mut self.state.category_modal {
            modal.error = Some(message);
        }
    }

    fn close_modal_editor(&mut self) {
        if let Some(modal) = &mut self.state.category_modal {
            modal.mode = CategoryMode::List;
            modal.input.clear();
            modal.error = None;
        }
    }

    /// Surfaces a failed remote call. An expired session goes back to login.
    fn report(&mut self, err: ClientError) {
        tracing::warn!("remote call failed: {err}");
        match err {
            ClientError::Unauthorized => {
                self.client.set_access_token(None);
                self.state.sign_out(today());
                self.state.login.message = Some("Session expired, sign in again.".to_string());
            }
            ClientError::Transport(_) => {
                self.state.connection_ok = false;
                self.state
                    .show_toast(login_message_for_error(err), ToastLevel::Error);
            }
            other => {
                self.state
                    .show_toast(login_message_for_error(other), ToastLevel::Error);
            }
        }
    }
}

fn active_login_field(login: &mut state::LoginState) -> &mut String {
    match login.focus {
        LoginField::Email => &mut login.email,
        LoginField::Password => &mut login.password,
    }
}

fn login_message_for_error(err: ClientError) -> String {
    match err {
        ClientError::Unauthorized => "Wrong credentials or expired session.".to_string(),
        ClientError::Forbidden => "Not allowed for this account.".to_string(),
        ClientError::NotFound => "Not found.".to_string(),
        ClientError::Conflict(message) => format!("Conflict: {message}"),
        ClientError::Validation(message) => message,
        ClientError::Server(message) => format!("Server error: {message}"),
        ClientError::Transport(err) => format!("Server unreachable: {err}"),
    }
}
