#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    Fixed(u16),
    #[default]
    Fill,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    /// Taken out of flow and placed against a corner of the parent's rect.
    Absolute,
}

/// Where an absolutely positioned element attaches to its parent.
///
/// `Bottom*` anchors hang the element below the parent (its top edge meets
/// the parent's bottom edge). `Inside` offsets from the parent's top-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Inside,
    BottomLeading,
    BottomTrailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Scroll,
}

/// Cross-axis placement of a container's children.
///
/// `Stretch` only affects `Size::Auto` children, which then take the full
/// cross size instead of their content size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    Center,
    #[default]
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Rounded,
}

impl Border {
    /// Glyphs as (top-left, top-right, bottom-left, bottom-right, horizontal, vertical).
    pub const fn glyphs(self) -> Option<(char, char, char, char, char, char)> {
        match self {
            Border::None => None,
            Border::Rounded => Some(('╭', '╮', '╰', '╯', '─', '│')),
        }
    }

    pub const fn width(self) -> u16 {
        match self {
            Border::None => 0,
            Border::Rounded => 1,
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
}
