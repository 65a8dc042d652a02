use engine::{Summary, monthly_totals};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::{Card, StatCard},
            charts,
            money::balance_color,
        },
        theme::Theme,
    },
};

/// Headline totals and the month-by-month chart of the overall tab.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let summary = Summary::from_rows(&state.transactions);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(layout[0]);

    StatCard::new(
        "Income",
        format!("+{}", summary.income),
        theme.positive,
        &theme,
    )
    .render(frame, cards[0]);
    StatCard::new(
        "Expense",
        format!("-{}", summary.expense),
        theme.negative,
        &theme,
    )
    .render(frame, cards[1]);
    let balance = summary.balance();
    StatCard::new(
        "Balance",
        balance.to_string(),
        balance_color(balance, &theme),
        &theme,
    )
    .render(frame, cards[2]);

    let inner = Card::new("Income vs expense by month", &theme).render_frame(frame, layout[1]);
    charts::render_monthly_chart(frame, inner, &monthly_totals(&state.transactions), &theme);
}
