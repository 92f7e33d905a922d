/// Spacing around the four sides of a box, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn horizontal(value: u16) -> Self {
        Self::new(0, value, 0, value)
    }

    pub const fn left(value: u16) -> Self {
        Self::new(0, 0, 0, value)
    }

    pub const fn right(value: u16) -> Self {
        Self::new(0, value, 0, 0)
    }

    pub const fn horizontal_total(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub const fn vertical_total(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}
