use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    app::{AlertLevel, AppState, CategoryMode},
    ui::{components::centered_box, theme::Theme},
};

fn popup_block(title: &str, color: Color, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.surface_bright))
}

fn render_message(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    message: &str,
    footer: Line<'static>,
    color: Color,
    theme: &Theme,
) {
    let popup = centered_box(56, 8, area);
    frame.render_widget(Clear, popup);
    let block = popup_block(title, color, theme);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: true }),
        rows[0],
    );
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Right), rows[1]);
}

pub fn render_alert(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let Some(alert) = &state.alert else {
        return;
    };
    let theme = Theme::default();
    let color = match alert.level {
        AlertLevel::Warning => theme.warning,
        AlertLevel::Success => theme.positive,
    };
    let footer = Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" ok"),
    ]);
    render_message(frame, area, &alert.title, &alert.message, footer, color, &theme);
}

pub fn render_confirm(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let Some(confirm) = &state.confirm else {
        return;
    };
    let theme = Theme::default();
    let footer = Line::from(vec![
        Span::styled("y", Style::default().fg(theme.negative)),
        Span::raw(" confirm  "),
        Span::styled("n", Style::default().fg(theme.accent)),
        Span::raw(" cancel"),
    ]);
    render_message(
        frame,
        area,
        &confirm.title,
        &confirm.message,
        footer,
        theme.warning,
        &theme,
    );
}

pub fn render_categories(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let Some(modal) = &state.category_modal else {
        return;
    };
    let theme = Theme::default();
    let popup = centered_box(44, 16, area);
    frame.render_widget(Clear, popup);

    let title = format!("{} categories", modal.kind.label());
    let block = popup_block(&title, theme.accent, &theme);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let categories = state.modal_categories();
    let items: Vec<ListItem<'_>> = if categories.is_empty() {
        vec![ListItem::new(Span::styled(
            "No categories",
            Style::default().fg(theme.dim),
        ))]
    } else {
        categories
            .iter()
            .map(|category| ListItem::new(category.name.clone()))
            .collect()
    };

    let mut list_state = ListState::default();
    if !categories.is_empty() {
        list_state.select(Some(modal.selected));
    }
    let list = List::new(items)
        .style(Style::default().fg(theme.text))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, rows[0], &mut list_state);

    let prompt = match modal.mode {
        CategoryMode::List => None,
        CategoryMode::New => Some("New"),
        CategoryMode::Rename(_) => Some("Rename"),
    };
    if let Some(prompt) = prompt {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{prompt}: "), Style::default().fg(theme.text_muted)),
                Span::styled(
                    format!("{}│", modal.input),
                    Style::default().fg(theme.accent),
                ),
            ])),
            rows[1],
        );
    }

    if let Some(error) = &modal.error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(theme.error))),
            rows[2],
        );
    }
}
