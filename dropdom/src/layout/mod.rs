mod flex;
mod rect;

use std::collections::HashMap;

pub use flex::layout;
pub use rect::Rect;

/// Output of a layout pass: one rect per element id, plus the content and
/// viewport sizes of scroll containers.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    content_sizes: HashMap<String, (u16, u16)>,
    viewport_sizes: HashMap<String, (u16, u16)>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Total size of a scroll container's children along both axes.
    pub fn content_size(&self, id: &str) -> Option<(u16, u16)> {
        self.content_sizes.get(id).copied()
    }

    /// Inner size of a scroll container (inside border and padding).
    pub fn viewport_size(&self, id: &str) -> Option<(u16, u16)> {
        self.viewport_sizes.get(id).copied()
    }

    pub(crate) fn set_scroll_sizes(&mut self, id: &str, content: (u16, u16), viewport: (u16, u16)) {
        self.content_sizes.insert(id.to_string(), content);
        self.viewport_sizes.insert(id.to_string(), viewport);
    }
}
