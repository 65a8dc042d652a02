use engine::DashboardTab;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

fn shortcut(tab: DashboardTab) -> &'static str {
    match tab {
        DashboardTab::Overall => "o",
        DashboardTab::Expense => "e",
        DashboardTab::Income => "i",
    }
}

pub fn render_tabs(frame: &mut Frame<'_>, area: Rect, active: DashboardTab, theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];

    for (i, tab) in DashboardTab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let label = format!("{} {}", shortcut(*tab), tab.label());
        if *tab == active {
            spans.push(Span::styled(
                format!("[{label}]"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(theme.text_muted)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
