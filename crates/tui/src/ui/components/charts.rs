use engine::{CategorySlice, MonthBucket, Money};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

use crate::ui::theme::{Theme, slice_color};

/// Bars are drawn in whole major units; cents don't move a bar.
fn bar_value(amount: Money) -> u64 {
    u64::try_from(amount.cents().max(0) / 100).unwrap_or(0)
}

/// Income and expense side by side for every month in the range.
pub fn render_monthly_chart(frame: &mut Frame<'_>, area: Rect, months: &[MonthBucket], theme: &Theme) {
    if months.is_empty() {
        render_empty(frame, area, theme);
        return;
    }

    let mut chart = BarChart::default()
        .bar_width(5)
        .bar_gap(1)
        .group_gap(3)
        .value_style(Style::default().fg(theme.background).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(theme.dim));

    for month in months {
        let bars = [
            Bar::default()
                .value(bar_value(month.income))
                .text_value(month.income.to_string())
                .style(Style::default().fg(theme.positive)),
            Bar::default()
                .value(bar_value(month.expense))
                .text_value(month.expense.to_string())
                .style(Style::default().fg(theme.negative)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(month.month.clone()))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}

/// A filled/empty bar of `width` cells for `percentage`.
#[must_use]
pub fn percentage_bar(percentage: u16, width: usize) -> String {
    let filled = (usize::from(percentage.min(100)) * width / 100).min(width);
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// One line per category: coloured bar, `name NN%` and the amount.
pub fn render_breakdown(frame: &mut Frame<'_>, area: Rect, slices: &[CategorySlice], total: Money, theme: &Theme) {
    if slices.is_empty() || total.is_zero() {
        render_empty(frame, area, theme);
        return;
    }

    let name_width = slices
        .iter()
        .map(|slice| slice.name.chars().count())
        .max()
        .unwrap_or(0);
    let bar_width = usize::from(area.width).saturating_sub(name_width + 22).max(4);

    let lines: Vec<Line<'_>> = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let share = slice.share(total);
            Line::from(vec![
                Span::styled(
                    percentage_bar(share, bar_width),
                    Style::default().fg(slice_color(i)),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("{:<name_width$} {share:>3}%", slice.name),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("  {:>12}", slice.value.to_string()),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_empty(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            "No data in this range",
            Style::default().fg(theme.dim),
        )),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_bar_fills_proportionally() {
        assert_eq!(percentage_bar(50, 10), "█████░░░░░");
        assert_eq!(percentage_bar(0, 4), "░░░░");
        assert_eq!(percentage_bar(250, 4), "████");
    }

    #[test]
    fn bars_drop_cents_and_negatives() {
        assert_eq!(bar_value(Money::new(12_399)), 123);
        assert_eq!(bar_value(Money::new(-500)), 0);
    }
}
