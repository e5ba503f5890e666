/// Box-drawing style for a rectangle outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
}

impl Border {
    /// Corner and edge glyphs: top-left, top-right, bottom-left, bottom-right,
    /// horizontal, vertical.
    pub const fn glyphs(self) -> Option<[char; 6]> {
        match self {
            Border::None => None,
            Border::Single => Some(['┌', '┐', '└', '┘', '─', '│']),
            Border::Rounded => Some(['╭', '╮', '╰', '╯', '─', '│']),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}
