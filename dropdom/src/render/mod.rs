use std::time::Instant;

use crate::animation::AnimationState;
use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{layout, LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Color, Overflow, Rgb, TextStyle};

/// An element placed in paint order.
pub(crate) struct RenderItem<'a> {
    pub element: &'a Element,
    pub layout: &'a LayoutResult,
    pub z_index: i16,
    pub tree_order: usize,
    /// Clip inherited from ancestors with overflow other than `Visible`.
    pub clip: Option<Rect>,
    /// Effective opacity: own (possibly animating) value times ancestors'.
    pub opacity: f32,
    /// Nearest clickable element among this element and its ancestors.
    pub hit_target: Option<&'a str>,
    /// Fading-out copies are painted but never hit.
    pub interactive: bool,
}

/// Lay out, advance animations and paint one frame into a fresh buffer.
pub fn draw(
    root: &Element,
    area: Rect,
    animation: &mut AnimationState,
    now: Instant,
) -> (LayoutResult, Buffer) {
    let layout = layout(root, area);
    animation.update(root, &layout, now);
    let mut buf = Buffer::new(area.width, area.height);
    render_to_buffer(root, &layout, &mut buf, animation, now);
    (layout, buf)
}

pub fn render_to_buffer(
    root: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    animation: &AnimationState,
    now: Instant,
) {
    let t0 = Instant::now();
    let items = paint_order(root, layout, Some((animation, now)));
    let count = items.len();

    for item in items {
        render_single_element(&item, buf);
    }

    log::trace!(
        "[render] {} elements in {:.2}µs",
        count,
        t0.elapsed().as_secs_f64() * 1_000_000.0
    );
}

/// Collect the tree (plus any fading-out copies) sorted by z-index, then tree order.
///
/// Children inherit their parent's z-index as a minimum, so a raised
/// subtree stays raised as a whole.
pub(crate) fn paint_order<'a>(
    root: &'a Element,
    layout: &'a LayoutResult,
    animation: Option<(&'a AnimationState, Instant)>,
) -> Vec<RenderItem<'a>> {
    let mut list = Vec::new();
    let mut order = 0;
    let walk = Walk {
        layout,
        animation,
        interactive: true,
    };
    walk.collect(root, &mut list, &mut order, root.z_index, None, 1.0, None);

    if let Some((state, now)) = animation {
        for exiting in state.exiting() {
            let ghost = Walk {
                layout: &exiting.layout,
                animation,
                interactive: false,
            };
            ghost.collect(
                &exiting.element,
                &mut list,
                &mut order,
                exiting.z_index,
                None,
                exiting.opacity(now),
                None,
            );
        }
    }

    list.sort_by_key(|item| (item.z_index, item.tree_order));
    list
}

struct Walk<'a> {
    layout: &'a LayoutResult,
    animation: Option<(&'a AnimationState, Instant)>,
    interactive: bool,
}

impl<'a> Walk<'a> {
    #[allow(clippy::too_many_arguments)]
    fn collect(
        &self,
        element: &'a Element,
        list: &mut Vec<RenderItem<'a>>,
        order: &mut usize,
        parent_z: i16,
        parent_clip: Option<Rect>,
        parent_opacity: f32,
        parent_target: Option<&'a str>,
    ) {
        let z_index = element.z_index.max(parent_z);

        let own_opacity = match self.animation {
            Some((state, now)) => {
                let opacity = state.opacity(&element.id, element.opacity, now);
                if self.interactive {
                    opacity * state.presence(&element.id, now)
                } else {
                    opacity
                }
            }
            None => element.opacity,
        };
        let opacity = parent_opacity * own_opacity;

        let hit_target = if element.clickable {
            Some(element.id.as_str())
        } else {
            parent_target
        };

        let child_clip = match (element.overflow, self.layout.get(&element.id)) {
            (Overflow::Visible, _) | (_, None) => parent_clip,
            (_, Some(rect)) => {
                let inner = inner_rect(element, *rect);
                Some(parent_clip.map_or(inner, |clip| clip.intersect(inner)))
            }
        };

        list.push(RenderItem {
            element,
            layout: self.layout,
            z_index,
            tree_order: *order,
            clip: parent_clip,
            opacity,
            hit_target,
            interactive: self.interactive,
        });
        *order += 1;

        for child in element.content.children() {
            self.collect(child, list, order, z_index, child_clip, opacity, hit_target);
        }
    }
}

/// Rect inside an element's border and padding.
pub(crate) fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border.width();
    rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}

fn render_single_element(item: &RenderItem, buf: &mut Buffer) {
    let element = item.element;
    let Some(&rect) = item.layout.get(&element.id) else {
        return;
    };
    if item.opacity <= 0.0 {
        return;
    }

    let visible = match item.clip {
        Some(clip) => rect.intersect(clip),
        None => rect,
    };
    if visible.is_empty() {
        return;
    }

    if let Some(bg) = element.style.background {
        fill_rect(buf, visible, bg, item.opacity);
    }

    render_border(element, rect, visible, buf, item.opacity);

    match &element.content {
        Content::Text(text) => render_text(text, element, rect, visible, buf, item.opacity),
        Content::Rule(glyph) => render_rule(*glyph, element, rect, visible, buf, item.opacity),
        _ => {}
    }

    if element.overflow == Overflow::Scroll {
        render_scrollbar(element, rect, visible, item.layout, buf, item.opacity);
    }
}

/// Final (color, alpha) for a style color at the given element opacity.
fn paint(color: Color, opacity: f32) -> (Rgb, f32) {
    (color.to_rgb(), color.alpha_value() * opacity)
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Color, opacity: f32) {
    let (rgb, alpha) = paint(bg, opacity);
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.fill(rgb, alpha);
            }
        }
    }
}

fn put_glyph(buf: &mut Buffer, visible: Rect, x: u16, y: u16, ch: char, fg: (Rgb, f32)) {
    if !visible.contains(x, y) {
        return;
    }
    let Some(cell) = buf.get_mut(x, y) else {
        return;
    };
    cell.put(ch, fg.0, fg.1, TextStyle::new());
}

fn render_border(element: &Element, rect: Rect, visible: Rect, buf: &mut Buffer, opacity: f32) {
    let Some((tl, tr, bl, br, h, v)) = element.style.border.glyphs() else {
        return;
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let color = element
        .style
        .border_color
        .or(element.style.foreground)
        .unwrap_or_else(Color::black);
    let fg = paint(color, opacity);
    let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);

    put_glyph(buf, visible, rect.x, rect.y, tl, fg);
    put_glyph(buf, visible, right, rect.y, tr, fg);
    put_glyph(buf, visible, rect.x, bottom, bl, fg);
    put_glyph(buf, visible, right, bottom, br, fg);

    for x in (rect.x + 1)..right {
        put_glyph(buf, visible, x, rect.y, h, fg);
        put_glyph(buf, visible, x, bottom, h, fg);
    }
    for y in (rect.y + 1)..bottom {
        put_glyph(buf, visible, rect.x, y, v, fg);
        put_glyph(buf, visible, right, y, v, fg);
    }
}

fn render_text(
    text: &str,
    element: &Element,
    rect: Rect,
    visible: Rect,
    buf: &mut Buffer,
    opacity: f32,
) {
    let inner = inner_rect(element, rect);
    let area = inner.intersect(visible);
    if area.is_empty() {
        return;
    }

    let color = element.style.foreground.unwrap_or_else(Color::black);
    let (rgb, alpha) = paint(color, opacity);
    let width = inner.width as usize;

    for (line_no, line) in text.lines().enumerate() {
        let y = inner.y + line_no as u16;
        if y >= inner.bottom() {
            break;
        }

        let line = truncate_to_width(line, width);
        let mut x = inner.x + align_offset(display_width(&line), width, element.text_align) as u16;

        for ch in line.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if area.contains(x, y) {
                if let Some(cell) = buf.get_mut(x, y) {
                    cell.put(ch, rgb, alpha, element.style.text_style);
                }
                if w == 2 && area.contains(x + 1, y) {
                    if let Some(cell) = buf.get_mut(x + 1, y) {
                        cell.char = ' ';
                        cell.wide_continuation = true;
                    }
                }
            }
            x += w;
        }
    }
}

fn render_rule(glyph: char, element: &Element, rect: Rect, visible: Rect, buf: &mut Buffer, opacity: f32) {
    let inner = inner_rect(element, rect);
    if inner.is_empty() {
        return;
    }
    let color = element.style.foreground.unwrap_or_else(Color::black);
    let fg = paint(color, opacity);
    for x in inner.x..inner.right() {
        put_glyph(buf, visible, x, inner.y, glyph, fg);
    }
}

/// Thumb on the right border of a scroll container whose content overflows.
fn render_scrollbar(
    element: &Element,
    rect: Rect,
    visible: Rect,
    layout: &LayoutResult,
    buf: &mut Buffer,
    opacity: f32,
) {
    let (Some((_, content_h)), Some((_, viewport_h))) = (
        layout.content_size(&element.id),
        layout.viewport_size(&element.id),
    ) else {
        return;
    };
    if content_h <= viewport_h || viewport_h == 0 || element.style.border.width() == 0 {
        return;
    }

    let track_top = rect.y + 1;
    let thumb_len = ((viewport_h as u32 * viewport_h as u32) / content_h as u32).max(1) as u16;
    let max_scroll = content_h - viewport_h;
    let scroll = element.scroll_offset.1.min(max_scroll);
    let thumb_top = track_top
        + ((viewport_h - thumb_len) as u32 * scroll as u32 / max_scroll as u32) as u16;

    let color = element
        .style
        .border_color
        .or(element.style.foreground)
        .unwrap_or_else(Color::black);
    let fg = paint(color, opacity);
    let x = rect.right() - 1;
    for y in thumb_top..thumb_top + thumb_len {
        put_glyph(buf, visible, x, y, '┃', fg);
    }
}
