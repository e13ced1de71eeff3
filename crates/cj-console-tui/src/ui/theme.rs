//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// CloudJunction color palette
pub struct Theme {
    // Primary branding colors
    pub cj_blue: Color,
    pub cj_navy: Color,
    pub cj_dark: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Primary branding - CloudJunction Blue
            cj_blue: Color::Rgb(21, 137, 238),  // #1589EE
            cj_navy: Color::Rgb(22, 50, 92),    // #16325C
            cj_dark: Color::Rgb(24, 24, 24),    // #181818

            // Status colors
            success: Color::Rgb(76, 175, 80),  // #4CAF50 - Green
            warning: Color::Rgb(255, 152, 0),  // #FF9800 - Orange
            danger: Color::Rgb(244, 67, 54),   // #F44336 - Red

            // UI elements
            border: Color::Rgb(66, 66, 66),            // #424242
            border_focused: Color::Rgb(21, 137, 238),  // #1589EE
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575
            selection: Color::Rgb(40, 55, 75),         // #28374B
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get highlighted text style
    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(self.cj_blue)
            .add_modifier(Modifier::BOLD)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.cj_blue)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Get success style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get danger style
    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get menu item style
    pub fn menu_item(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .bg(self.selection)
                .fg(self.cj_blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_primary)
        }
    }

    /// Get input field style
    pub fn input(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.text_primary).bg(self.cj_dark)
        } else {
            Style::default().fg(self.text_secondary).bg(self.cj_dark)
        }
    }

    /// Get style for a resource status cell
    pub fn resource_status(&self, up: bool) -> Style {
        if up {
            Style::default().fg(self.success)
        } else {
            Style::default().fg(self.danger)
        }
    }
}
