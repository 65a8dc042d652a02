use engine::{FormField, TransactionKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, Focus},
    ui::{
        components::{card::Card, money::kind_color},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let focused = state.focus == Focus::Form;
    let inner = Card::new("New transaction", &theme)
        .focused(focused)
        .render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(kind_line(state.form.kind, &theme)), rows[0]);

    let form = &state.form;
    let active = focused.then_some(state.form_field);
    let fields = [
        (FormField::Title, "Title", form.title.as_str()),
        (FormField::Amount, "Amount", form.amount.as_str()),
        (FormField::Category, "Category", form.category.as_str()),
        (FormField::Date, "Date", form.date.as_str()),
    ];
    for (i, (field, label, value)) in fields.into_iter().enumerate() {
        let line = field_line(label, value, field, active == Some(field), &theme);
        frame.render_widget(Paragraph::new(line), rows[i + 1]);
    }

    if let Some(error) = &state.form_error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(theme.error))),
            rows[6],
        );
    } else if !focused {
        frame.render_widget(
            Paragraph::new(Span::styled("press a to add", Style::default().fg(theme.dim))),
            rows[6],
        );
    }
}

fn kind_line(kind: TransactionKind, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled("Type      ", Style::default().fg(theme.dim))];
    for option in [TransactionKind::Expense, TransactionKind::Income] {
        let style = if option == kind {
            Style::default()
                .fg(kind_color(option, theme))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        let marker = if option == kind { "●" } else { "○" };
        spans.push(Span::styled(format!("{marker} {}  ", option.label()), style));
    }
    Line::from(spans)
}

fn field_line<'a>(label: &'a str, value: &'a str, field: FormField, active: bool, theme: &Theme) -> Line<'a> {
    let (cursor, style) = if active {
        ("│", Style::default().fg(theme.accent))
    } else {
        ("", Style::default().fg(theme.text))
    };
    let value = if field == FormField::Category && active {
        format!("‹ {value} ›")
    } else {
        format!("{value}{cursor}")
    };
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(theme.dim)),
        Span::styled(value, style),
    ])
}
