//! Semantic color roles and text styles.

use tuidom::{Color, TextStyle};

/// Colors the UI asks for by role. Palette values live only here.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub text: Color,
    pub muted: Color,
}

impl Theme {
    /// Dark theme with purple accents.
    pub fn dark() -> Self {
        Self {
            background: Color::oklch(0.18, 0.01, 300.0),
            surface: Color::oklch(0.26, 0.03, 300.0),
            primary: Color::oklch(0.80, 0.10, 300.0),
            on_primary: Color::oklch(0.25, 0.08, 300.0),
            text: Color::oklch(0.93, 0.01, 300.0),
            muted: Color::oklch(0.62, 0.03, 300.0),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::oklch(0.98, 0.01, 300.0),
            surface: Color::oklch(0.92, 0.03, 300.0),
            primary: Color::oklch(0.45, 0.15, 300.0),
            on_primary: Color::oklch(0.98, 0.0, 0.0),
            text: Color::oklch(0.20, 0.02, 300.0),
            muted: Color::oklch(0.50, 0.03, 300.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Typography roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Body,
    /// Card names: extra bold.
    Headline,
    Label,
}

impl TextRole {
    pub fn style(self) -> TextStyle {
        match self {
            TextRole::Body => TextStyle::new(),
            TextRole::Headline => TextStyle::new().bold(),
            TextRole::Label => TextStyle::new().italic(),
        }
    }
}
