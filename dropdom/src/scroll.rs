use std::collections::{HashMap, HashSet};

use crate::element::Element;
use crate::event::Event;
use crate::layout::LayoutResult;
use crate::render::paint_order;
use crate::types::Overflow;

/// Scroll offset for a scrollable element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

impl ScrollOffset {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Scroll offsets of `Overflow::Scroll` elements, kept across frames.
///
/// Views don't track scrolling themselves: the loop stamps the stored
/// offsets onto each freshly built tree with [`ScrollState::apply`] before
/// layout, and feeds wheel events to [`ScrollState::handle`].
#[derive(Debug, Default)]
pub struct ScrollState {
    offsets: HashMap<String, ScrollOffset>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> ScrollOffset {
        self.offsets.get(id).copied().unwrap_or_default()
    }

    pub fn set(&mut self, id: &str, x: u16, y: u16) {
        self.offsets.insert(id.to_string(), ScrollOffset::new(x, y));
    }

    /// Copy stored offsets onto the scroll containers of a new tree.
    ///
    /// Offsets of containers missing from the tree are forgotten, so a
    /// container that is unmounted and mounted again starts at the top.
    pub fn apply(&mut self, root: &mut Element) {
        let mut mounted = HashSet::new();
        root.walk_mut(&mut |el| {
            if el.overflow == Overflow::Scroll {
                let offset = self.get(&el.id);
                el.scroll_offset = (offset.x, offset.y);
                mounted.insert(el.id.clone());
            }
        });

        self.offsets.retain(|id, _| {
            let keep = mounted.contains(id);
            if !keep {
                log::debug!("[scroll] {id} unmounted, offset reset");
            }
            keep
        });
    }

    /// Scroll the container under a wheel event.
    /// Returns true if the event was consumed.
    pub fn handle(&mut self, event: &Event, root: &Element, layout: &LayoutResult) -> bool {
        let Event::Scroll {
            x,
            y,
            delta_x,
            delta_y,
            ..
        } = *event
        else {
            return false;
        };

        let Some(id) = find_scrollable_at(root, layout, x, y) else {
            return false;
        };
        let (Some((content_w, content_h)), Some((view_w, view_h))) =
            (layout.content_size(&id), layout.viewport_size(&id))
        else {
            return false;
        };

        let current = self.get(&id);
        let max_x = content_w.saturating_sub(view_w) as i32;
        let max_y = content_h.saturating_sub(view_h) as i32;
        let new_x = (current.x as i32 + delta_x as i32).clamp(0, max_x) as u16;
        let new_y = (current.y as i32 + delta_y as i32).clamp(0, max_y) as u16;

        if new_x == current.x && new_y == current.y {
            return false;
        }

        log::debug!("[scroll] {id} -> ({new_x}, {new_y})");
        self.offsets.insert(id, ScrollOffset::new(new_x, new_y));
        true
    }
}

/// Topmost scroll container under the point.
fn find_scrollable_at(root: &Element, layout: &LayoutResult, x: u16, y: u16) -> Option<String> {
    paint_order(root, layout, None)
        .iter()
        .rev()
        .filter(|item| item.element.overflow == Overflow::Scroll)
        .find(|item| {
            layout.get(&item.element.id).is_some_and(|rect| {
                item.clip
                    .map_or(*rect, |clip| rect.intersect(clip))
                    .contains(x, y)
            })
        })
        .map(|item| item.element.id.clone())
}
