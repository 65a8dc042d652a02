use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::AppState,
    ui::{components::centered_rect, theme::Theme},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Dashboard",
        &[
            ("o / e / i", "overall, expense and income tabs"),
            ("↑↓ / j k", "select a transaction"),
            ("x", "delete the selected transaction"),
            ("d", "edit the date range"),
            ("r", "reload from the server"),
            ("L", "sign out"),
            ("q / Ctrl+C", "quit"),
        ],
    ),
    (
        "New transaction (a)",
        &[
            ("Tab", "next field"),
            ("← →", "switch income/expense"),
            ("↑ ↓", "pick a category"),
            ("Enter", "save"),
            ("Esc", "back to the table"),
        ],
    ),
    (
        "Categories of the tab (c, overall: expense)",
        &[
            ("n", "new category"),
            ("r", "rename"),
            ("x", "delete"),
        ],
    ),
];

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    if !state.help {
        return;
    }

    let theme = Theme::default();
    let popup = centered_rect(60, 70, area);
    let block = Block::default()
        .title(Span::styled(" Help ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.surface_bright));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(help_lines(&theme)).block(block), popup);
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            *title,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )));
        for (key, action) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), Style::default().fg(theme.accent)),
                Span::styled(*action, Style::default().fg(theme.text_muted)),
            ]));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc close",
        Style::default().fg(theme.dim),
    )));
    lines
}
