use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub surface_bright: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            surface: Color::Rgb(20, 26, 32),
            surface_bright: Color::Rgb(26, 33, 40),
            border: Color::Rgb(60, 70, 80),
            border_focused: Color::Rgb(80, 160, 160),
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(160, 165, 170),
            dim: Color::Rgb(120, 120, 120),
            accent: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(46, 204, 113),
            negative: Color::Rgb(231, 76, 60),
            warning: Color::Rgb(230, 180, 60),
            error: Color::Rgb(200, 80, 80),
        }
    }
}

/// Colour of the `index`-th slice of a category breakdown.
pub fn slice_color(index: usize) -> Color {
    let (r, g, b) = engine::slice_color(index);
    Color::Rgb(r, g, b)
}
