use ratatui::{style::Style, text::Span};

use crate::{
    app::{AppState, CategoryMode, Focus},
    ui::theme::Theme,
};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

const fn hint(key: &'static str, action: &'static str) -> KeyHint {
    KeyHint { key, action }
}

pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }
    spans
}

/// Hints for whatever currently receives key presses.
pub fn context_hints(state: &AppState) -> Vec<KeyHint> {
    if state.confirm.is_some() {
        return vec![hint("Enter/y", "confirm"), hint("Esc/n", "cancel")];
    }
    if state.alert.is_some() || state.help {
        return vec![hint("Enter/Esc", "close")];
    }
    if let Some(modal) = &state.category_modal {
        return match modal.mode {
            CategoryMode::List => vec![
                hint("↑↓", "select"),
                hint("n", "new"),
                hint("r", "rename"),
                hint("x", "delete"),
                hint("Esc", "close"),
            ],
            CategoryMode::New | CategoryMode::Rename(_) => {
                vec![hint("Enter", "save"), hint("Esc", "back")]
            }
        };
    }

    match state.focus {
        Focus::Table => vec![
            hint("o/e/i", "tab"),
            hint("↑↓", "select"),
            hint("a", "add"),
            hint("x", "delete"),
            hint("c", "categories"),
            hint("d", "dates"),
            hint("r", "refresh"),
            hint("L", "logout"),
            hint("?", "help"),
            hint("q", "quit"),
        ],
        Focus::Form => vec![
            hint("Tab", "next field"),
            hint("←→", "kind"),
            hint("↑↓", "category"),
            hint("Enter", "save"),
            hint("Esc", "back"),
        ],
        Focus::Range => vec![
            hint("Tab", "start/end"),
            hint("Enter", "apply"),
            hint("Esc", "cancel"),
        ],
    }
}
