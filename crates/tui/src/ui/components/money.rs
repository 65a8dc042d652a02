use engine::{Money, TransactionKind};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// `+1,234.50` for income, `-1,234.50` for expenses.
pub fn signed_label(amount: Money, kind: TransactionKind) -> String {
    format!("{}{}", kind.sign(), amount.abs())
}

pub fn kind_color(kind: TransactionKind, theme: &Theme) -> Color {
    match kind {
        TransactionKind::Income => theme.positive,
        TransactionKind::Expense => theme.negative,
    }
}

pub fn styled_amount(amount: Money, kind: TransactionKind, theme: &Theme) -> Span<'static> {
    Span::styled(
        signed_label(amount, kind),
        Style::default().fg(kind_color(kind, theme)),
    )
}

/// Balance coloured by sign; zero stays neutral.
pub fn balance_color(balance: Money, theme: &Theme) -> Color {
    if balance.is_negative() {
        theme.negative
    } else if balance.is_zero() {
        theme.text
    } else {
        theme.positive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_labels_follow_kind() {
        assert_eq!(
            signed_label(Money::new(123_450), TransactionKind::Income),
            "+1,234.50"
        );
        assert_eq!(signed_label(Money::new(999), TransactionKind::Expense), "-9.99");
    }

    #[test]
    fn balance_colour_by_sign() {
        let theme = Theme::default();
        assert_eq!(balance_color(Money::new(-1), &theme), theme.negative);
        assert_eq!(balance_color(Money::ZERO, &theme), theme.text);
        assert_eq!(balance_color(Money::new(1), &theme), theme.positive);
    }
}
