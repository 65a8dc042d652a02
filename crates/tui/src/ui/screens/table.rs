use engine::format_date;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::{
    app::{AppState, Focus},
    ui::{
        components::{card::Card, money::styled_amount},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let rows = state.visible_transactions();
    let title = format!("{} transactions ({})", state.tab.label(), rows.len());
    let inner = Card::new(&title, &theme)
        .focused(state.focus == Focus::Table)
        .render_frame(frame, area);

    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No transactions", Style::default().fg(theme.dim))),
            inner,
        );
        return;
    }

    let header = Row::new(["Date", "Title", "Category", "Amount"])
        .style(Style::default().fg(theme.text_muted).add_modifier(Modifier::BOLD));
    let body = rows.iter().map(|tx| {
        Row::new(vec![
            Cell::from(format_date(tx.date)),
            Cell::from(tx.title.clone()),
            Cell::from(tx.category.clone()),
            Cell::from(styled_amount(tx.amount, tx.kind, &theme)),
        ])
        .style(Style::default().fg(theme.text))
    });

    let table = Table::new(
        body,
        [
            Constraint::Length(10),
            Constraint::Min(12),
            Constraint::Length(14),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .column_spacing(2)
    .row_highlight_style(
        Style::default()
            .bg(theme.surface_bright)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("› ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, inner, &mut table_state);
}
