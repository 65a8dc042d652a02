pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use engine::DashboardTab;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{AppState, Focus, RangeField, Screen};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();
    frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    match state.screen {
        Screen::Login => screens::login::render(frame, area, state),
        Screen::Dashboard => render_dashboard(frame, area, state, &theme),
    }
}

fn render_dashboard(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, theme);
    components::tabs::render_tabs(frame, layout[1], state.tab, theme);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Min(0)])
        .split(layout[2]);
    match state.tab {
        DashboardTab::Overall => screens::overview::render(frame, content[0], state),
        DashboardTab::Expense | DashboardTab::Income => {
            screens::breakdown::render(frame, content[0], state)
        }
    }

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(38)])
        .split(content[1]);
    screens::table::render(frame, lower[0], state);
    screens::entry_form::render(frame, lower[1], state);

    render_bottom_bar(frame, layout[3], state, theme);

    components::modal::render_categories(frame, area, state);
    components::help_overlay::render(frame, area, state);
    components::modal::render_alert(frame, area, state);
    components::modal::render_confirm(frame, area, state);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let user = state
        .user
        .as_ref()
        .and_then(|user| user.email.as_deref())
        .unwrap_or("-");
    let refresh = state
        .last_refresh
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let (status, status_color) = if state.connection_ok {
        ("OK", theme.positive)
    } else {
        ("OFFLINE", theme.error)
    };

    let mut spans = vec![
        Span::styled("User", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {user}  ")),
        Span::styled("Range", Style::default().fg(theme.text_muted)),
        Span::raw(": "),
    ];
    spans.extend(range_spans(state, theme));
    spans.extend([
        Span::raw("  "),
        Span::styled("Refresh", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {refresh}  ")),
        Span::styled(status, Style::default().fg(status_color)),
    ]);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The active range, or the two editable bounds while `d` is in use.
fn range_spans(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    if state.focus != Focus::Range {
        return vec![Span::raw(state.range.to_string())];
    }

    let edit = &state.range_edit;
    let bound = |value: &str, field: RangeField| {
        if edit.field == field {
            Span::styled(format!("{value}│"), Style::default().fg(theme.accent))
        } else {
            Span::styled(value.to_string(), Style::default().fg(theme.text))
        }
    };
    let mut spans = vec![
        bound(&edit.start, RangeField::Start),
        Span::raw(" - "),
        bound(&edit.end, RangeField::End),
    ];
    if let Some(error) = &edit.error {
        spans.push(Span::styled(
            format!("  {error}"),
            Style::default().fg(theme.error),
        ));
    }
    spans
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = components::hints::context_hints(state);
    let mut parts = vec![Span::raw(" ")];
    parts.extend(components::hints::hints_to_spans(&hints, theme));
    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
