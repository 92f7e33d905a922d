use super::{LayoutResult, Rect};
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Anchor, Direction, Overflow, Position, Size};

/// Lay out `element` and its descendants inside `available`.
///
/// `available` doubles as the viewport: anchored overlays are sized and
/// clamped against it rather than against their (usually small) parent.
/// A root with `Size::Auto` fills `available` along that axis.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let ctx = Ctx { viewport: available };

    if element.position == Position::Absolute {
        layout_absolute(element, available, &ctx, &mut result);
    } else {
        let margin = &element.margin;
        let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);
        let width = resolve_size(root_size(element.width), after_margin.width, element, true);
        let height = resolve_size(root_size(element.height), after_margin.height, element, false);
        let rect = Rect::new(after_margin.x, after_margin.y, width, height);
        result.insert(element.id.clone(), rect);
        layout_children(element, rect, &ctx, &mut result);
    }

    result
}

struct Ctx {
    viewport: Rect,
}

fn root_size(size: Size) -> Size {
    match size {
        Size::Auto => Size::Fill,
        other => other,
    }
}

fn layout_absolute(element: &Element, parent: Rect, ctx: &Ctx, result: &mut LayoutResult) {
    let margin = &element.margin;
    let width = resolve_size(
        element.width,
        parent.width.saturating_sub(margin.horizontal_total()),
        element,
        true,
    );
    // Overlays routinely outgrow their anchor vertically (a dropdown under
    // a one-line control), so height is resolved against the viewport.
    let height = resolve_size(
        element.height,
        ctx.viewport.height.saturating_sub(margin.vertical_total()),
        element,
        false,
    );

    let (px, py) = (parent.x as i32, parent.y as i32);
    let (w, h) = (width as i32, height as i32);
    let (x, y) = match element.anchor {
        Anchor::Inside => (px, py),
        Anchor::BottomLeading => (px, parent.bottom() as i32),
        Anchor::BottomTrailing => (parent.right() as i32 - w, parent.bottom() as i32),
    };
    let x = x + element.offset.0 as i32 + margin.left as i32;
    let y = y + element.offset.1 as i32 + margin.top as i32;

    // Slide back horizontally to stay on screen; vertical overflow is clipped.
    let max_x = ctx.viewport.right() as i32 - w;
    let x = x.min(max_x).max(ctx.viewport.x as i32);

    let rect = Rect::from_signed(x, y, width, height).intersect(ctx.viewport);
    log::trace!("[layout] overlay {} anchored {:?} at {:?}", element.id, element.anchor, rect);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, ctx, result);
}

fn layout_children(element: &Element, rect: Rect, ctx: &Ctx, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let flow_children: Vec<&Element> = children
        .iter()
        .filter(|c| c.position != Position::Absolute)
        .collect();

    let border = element.style.border.width();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let is_row = element.direction == Direction::Row;
    let scrolls = element.overflow == Overflow::Scroll;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed sizes and fill count
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;

    for child in &flow_children {
        let (before, after) = main_margins(child, is_row);
        fixed_total = fixed_total.saturating_add(before).saturating_add(after);
        match main_axis(child, is_row) {
            Size::Fill => fill_count += 1,
            other => fixed_total = fixed_total.saturating_add(main_length(other, child, is_row, 0)),
        }
    }

    let remaining = main_size.saturating_sub(fixed_total);
    let fill_size = if fill_count > 0 { remaining / fill_count } else { 0 };
    let sizes: Vec<u16> = flow_children
        .iter()
        .map(|child| main_length(main_axis(child, is_row), child, is_row, fill_size))
        .collect();

    let (scroll_x, scroll_y) = if scrolls { element.scroll_offset } else { (0, 0) };
    let scroll_main = (if is_row { scroll_x } else { scroll_y }) as i32;
    let mut offset = 0i32;
    let mut cross_extent = 0u16;

    for (child, &main) in flow_children.iter().zip(&sizes) {
        let (margin_before, margin_after) = main_margins(child, is_row);
        let (cross_before, cross_after) = if is_row {
            (child.margin.top, child.margin.bottom)
        } else {
            (child.margin.left, child.margin.right)
        };

        let child_align = element.align;
        let available_cross = cross_size.saturating_sub(cross_before.saturating_add(cross_after));
        let cross = match cross_axis(child, is_row) {
            Size::Fixed(n) => n,
            Size::Fill => available_cross,
            Size::Auto if child_align == Align::Stretch => available_cross,
            Size::Auto => estimate_size(child, !is_row),
        }
        .min(available_cross);
        cross_extent =
            cross_extent.max(cross.saturating_add(cross_before).saturating_add(cross_after));

        let main = if scrolls {
            main
        } else {
            let room = (main_size as i32 - offset - margin_before as i32).max(0) as u16;
            main.min(room)
        };

        let cross_offset = match child_align {
            Align::Start | Align::Stretch => cross_before,
            Align::Center => cross_before + available_cross.saturating_sub(cross) / 2,
        };

        let main_pos = offset + margin_before as i32 - scroll_main;
        let child_rect = if is_row {
            Rect::from_signed(
                inner.x as i32 + main_pos,
                inner.y as i32 + cross_offset as i32,
                main,
                cross,
            )
        } else {
            Rect::from_signed(
                inner.x as i32 + cross_offset as i32,
                inner.y as i32 + main_pos,
                cross,
                main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, ctx, result);

        offset += margin_before as i32 + main as i32 + margin_after as i32;
    }

    if scrolls {
        let content_main = offset.clamp(0, u16::MAX as i32) as u16;
        let content = if is_row {
            (content_main, cross_extent)
        } else {
            (cross_extent, content_main)
        };
        result.set_scroll_sizes(&element.id, content, (inner.width, inner.height));
    }

    for child in children.iter().filter(|c| c.position == Position::Absolute) {
        layout_absolute(child, rect, ctx, result);
    }
}

fn main_axis(child: &Element, is_row: bool) -> Size {
    if is_row { child.width } else { child.height }
}

fn cross_axis(child: &Element, is_row: bool) -> Size {
    if is_row { child.height } else { child.width }
}

fn main_margins(child: &Element, is_row: bool) -> (u16, u16) {
    if is_row {
        (child.margin.left, child.margin.right)
    } else {
        (child.margin.top, child.margin.bottom)
    }
}

fn main_length(size: Size, child: &Element, is_row: bool, fill: u16) -> u16 {
    match size {
        Size::Fixed(n) => n,
        Size::Auto => estimate_size(child, is_row),
        Size::Fill => fill,
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width),
    }
    .min(available)
}

/// Intrinsic size of an element along one axis, including padding and border.
pub(crate) fn estimate_size(element: &Element, is_width: bool) -> u16 {
    match (is_width, element.width, element.height) {
        (true, Size::Fixed(n), _) | (false, _, Size::Fixed(n)) => return n,
        _ => {}
    }

    let border = element.style.border.width() * 2;
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::None => 0,
        Content::Rule(_) => u16::from(!is_width),
        Content::Text(text) => {
            let size = if is_width {
                text.lines().map(display_width).max().unwrap_or(0)
            } else {
                text.lines().count().max(1)
            };
            u16::try_from(size).unwrap_or(u16::MAX)
        }
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position != Position::Absolute);
            let outer =
                |c: &Element| estimate_size(c, is_width).saturating_add(margin_along(c, is_width));
            let along_main = (element.direction == Direction::Row) == is_width;
            if along_main {
                flow.map(outer).fold(0, u16::saturating_add)
            } else {
                flow.map(outer).max().unwrap_or(0)
            }
        }
    };

    content_size.saturating_add(padding).saturating_add(border)
}

fn margin_along(element: &Element, is_width: bool) -> u16 {
    if is_width {
        element.margin.horizontal_total()
    } else {
        element.margin.vertical_total()
    }
}
