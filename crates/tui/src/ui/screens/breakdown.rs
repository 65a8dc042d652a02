use engine::{breakdown_total, category_breakdown};
use ratatui::{Frame, layout::Rect};

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, charts, money::signed_label},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let kind = state.tab.managed_kind();
    let slices = category_breakdown(&state.transactions, kind);
    let total = breakdown_total(&slices);

    let title = format!("{} by category  {}", kind.label(), signed_label(total, kind));
    let inner = Card::new(&title, &theme).render_frame(frame, area);
    charts::render_breakdown(frame, inner, &slices, total, &theme);
}
