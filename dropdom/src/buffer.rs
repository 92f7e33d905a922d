use crate::types::{Rgb, TextStyle};

/// One terminal cell after compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Second column of a double-width glyph; the terminal skips it.
    pub wide_continuation: bool,
}

impl Cell {
    /// Black on white space: what a fresh frame starts from.
    pub const BLANK: Cell = Cell {
        char: ' ',
        fg: Rgb::BLACK,
        bg: Rgb::WHITE,
        style: TextStyle::new(),
        wide_continuation: false,
    };

    /// Composite a background color over the cell.
    ///
    /// An opaque fill wipes whatever glyph was there. A translucent one
    /// keeps the glyph and tints it along with the background.
    pub fn fill(&mut self, color: Rgb, alpha: f32) {
        self.bg = color.over(self.bg, alpha);
        if alpha >= 1.0 {
            self.char = ' ';
            self.style = TextStyle::new();
            self.wide_continuation = false;
        } else {
            self.fg = color.over(self.fg, alpha);
        }
    }

    /// Draw a glyph whose color is blended against the current background.
    pub fn put(&mut self, ch: char, color: Rgb, alpha: f32, style: TextStyle) {
        self.char = ch;
        self.fg = color.over(self.bg, alpha);
        self.style = style;
        self.wide_continuation = false;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// A grid of cells the renderer paints into and the terminal diffs.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|idx| &mut self.cells[idx])
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Every cell with its coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % width) as u16, (i / width) as u16, cell))
    }

    /// Cells of `self` that differ from `previous`, with their coordinates.
    ///
    /// Both buffers must have the same size.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells()
            .zip(previous.cells.iter())
            .filter(|((_, _, a), b)| a != b)
            .map(|(changed, _)| changed)
    }

    /// Row `y` as plain text (continuation cells skipped).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }
}
