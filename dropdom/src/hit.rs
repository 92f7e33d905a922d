use crate::element::Element;
use crate::layout::LayoutResult;
use crate::render::paint_order;

/// Find the clickable element under the given coordinates.
///
/// Walks the paint order from the top. The first element that contains
/// the point and is either clickable (or inside something clickable) or
/// paints a background decides the result: a clickable hit returns the
/// nearest clickable element, an opaque non-clickable one swallows the
/// point so nothing underneath receives it. Elements that are fading out
/// after removal are ignored.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let items = paint_order(root, layout, None);

    for item in items.iter().rev() {
        if !item.interactive {
            continue;
        }
        let Some(rect) = layout.get(&item.element.id) else {
            continue;
        };
        let visible = item.clip.map_or(*rect, |clip| rect.intersect(clip));
        if !visible.contains(x, y) {
            continue;
        }

        if let Some(target) = item.hit_target {
            return Some(target.to_string());
        }
        if item.element.style.background.is_some() {
            return None;
        }
    }

    None
}
