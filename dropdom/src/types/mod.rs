mod color;
mod edges;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use edges::Edges;
pub use enums::{
    Align, Anchor, Border, Direction, Overflow, Position, Size, TextAlign, TextStyle,
};
pub use style::Style;
