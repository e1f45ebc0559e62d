use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct Theme {
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub drag: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub spinner: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Default for Theme {
    /// Indigo accents on a dark background.
    fn default() -> Self {
        Self {
            accent: Color::Rgb(99, 102, 241),
            success: Color::Rgb(34, 197, 94),
            error: Color::Rgb(239, 68, 68),
            drag: Color::Rgb(129, 140, 248),

            header_fg: Color::White,
            header_bg: Color::Rgb(67, 56, 202),
            border: Color::Rgb(75, 85, 99),
            text: Color::White,
            dim: Color::Rgb(156, 163, 175),
            highlight_bg: Color::Rgb(49, 46, 129),
            spinner: Color::Rgb(129, 140, 248),
            footer_fg: Color::Rgb(156, 163, 175),
            footer_bg: Color::Reset,
        }
    }
}

impl Theme {
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Drop-zone border: brighter while something hovers over it.
    pub fn drop_zone_style(&self, drag_active: bool, has_selection: bool) -> Style {
        if drag_active {
            Style::default().fg(self.drag).add_modifier(Modifier::BOLD)
        } else if has_selection {
            Style::default().fg(self.success)
        } else {
            self.border_style()
        }
    }

    pub fn button_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(self.header_fg)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.dim).bg(self.highlight_bg)
        }
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
