use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::transitions::Transitions;
use crate::types::{
    Align, Anchor, Direction, Edges, Overflow, Position, Size, Style, TextAlign,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node of the retained view tree.
///
/// Trees are rebuilt from application state on every frame; `id` is what
/// ties a node to its layout rect, scroll offset and running transitions
/// across rebuilds, so anything animated or clickable needs a stable id.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub content: Content,

    // Box model
    pub width: Size,
    pub height: Size,
    pub padding: Edges,
    pub margin: Edges,

    // Positioning
    pub position: Position,
    pub anchor: Anchor,
    /// Extra offset applied after anchoring, for absolute elements.
    pub offset: (i16, i16),
    pub z_index: i16,

    // Flex container
    pub direction: Direction,
    pub align: Align,

    pub overflow: Overflow,
    pub scroll_offset: (u16, u16),

    // Visual
    pub style: Style,
    /// 0.0 (invisible) to 1.0 (opaque). Multiplies down the tree.
    pub opacity: f32,
    pub transitions: Transitions,
    pub text_align: TextAlign,

    // Interaction
    pub clickable: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            margin: Edges::default(),
            position: Position::Static,
            anchor: Anchor::Inside,
            offset: (0, 0),
            z_index: 0,
            direction: Direction::Column,
            align: Align::Stretch,
            overflow: Overflow::Visible,
            scroll_offset: (0, 0),
            style: Style::default(),
            opacity: 1.0,
            transitions: Transitions::default(),
            text_align: TextAlign::Left,
            clickable: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// One-row horizontal line, e.g. a list separator.
    pub fn rule(glyph: char) -> Self {
        Self {
            id: generate_id("rule"),
            content: Content::Rule(glyph),
            height: Size::Fixed(1),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    /// Take the element out of flow and attach it to a corner of its parent.
    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.position = Position::Absolute;
        self.anchor = anchor;
        self
    }

    pub fn offset(mut self, dx: i16, dy: i16) -> Self {
        self.offset = (dx, dy);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    // Flex container
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn transitions(mut self, transitions: Transitions) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Visit this element and every descendant, parents first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in self.content.children() {
            child.walk(visit);
        }
    }

    /// Mutable variant of [`Element::walk`].
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Element)) {
        visit(self);
        if let Content::Children(children) = &mut self.content {
            for child in children {
                child.walk_mut(visit);
            }
        }
    }
}
