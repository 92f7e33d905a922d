use std::time::Instant;

use dropdom::{AnimationState, Anchor, Border, Buffer, Color, Element, Overflow, Rect, Rgb, Size, Style};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let mut animation = AnimationState::new();
    let (_, buf) = dropdom::draw(root, Rect::from_size(width, height), &mut animation, Instant::now());
    buf
}

fn bg_at(buf: &Buffer, x: u16, y: u16) -> Rgb {
    buf.get(x, y).unwrap().bg
}

const RED: Rgb = Rgb::new(255, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn layer(id: &str, color: Color, z: i16) -> Element {
    Element::box_()
        .id(id)
        .anchored(Anchor::Inside)
        .width(Size::Fixed(5))
        .height(Size::Fixed(3))
        .z_index(z)
        .style(Style::new().background(color))
}

// ============================================================================
// Z-Index Tests
// ============================================================================

#[test]
fn test_higher_z_index_renders_on_top() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(5))
        .child(layer("high", Color::rgb(0, 0, 255), 1))
        .child(layer("low", Color::rgb(255, 0, 0), 0));

    let buf = render(&root, 10, 5);
    assert_eq!(bg_at(&buf, 0, 0), BLUE, "later in tree but lower z stays under");
}

#[test]
fn test_equal_z_index_preserves_tree_order() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(5))
        .child(layer("first", Color::rgb(0, 0, 255), 0))
        .child(layer("second", Color::rgb(255, 0, 0), 0));

    let buf = render(&root, 10, 5);
    assert_eq!(bg_at(&buf, 2, 1), RED);
}

#[test]
fn test_children_inherit_raised_z_index() {
    // The overlay belongs to a raised subtree and paints over the later sibling.
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(8))
        .child(
            Element::box_()
                .id("wrap")
                .height(Size::Fixed(1))
                .z_index(1)
                .child(
                    Element::box_()
                        .id("overlay")
                        .anchored(Anchor::BottomLeading)
                        .width(Size::Fill)
                        .height(Size::Fixed(3))
                        .style(Style::new().background(Color::rgb(0, 0, 255))),
                ),
        )
        .child(
            Element::box_()
                .id("sibling")
                .height(Size::Fixed(4))
                .style(Style::new().background(Color::rgb(255, 0, 0))),
        );

    let buf = render(&root, 10, 8);
    assert_eq!(bg_at(&buf, 0, 1), BLUE);
    assert_eq!(bg_at(&buf, 0, 3), BLUE);
    assert_eq!(bg_at(&buf, 0, 4), RED, "below the overlay the sibling shows");
}

// ============================================================================
// Opacity Tests
// ============================================================================

#[test]
fn test_half_opacity_blends_over_background() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(2))
        .opacity(0.5)
        .style(Style::new().background(Color::black()));

    let buf = render(&root, 4, 2);
    let bg = bg_at(&buf, 0, 0);

    assert_eq!(bg, Rgb::BLACK.over(Rgb::WHITE, 0.5));
    assert!(bg.r > 150 && bg.r < 220, "mixed in linear light, got {bg:?}");
}

#[test]
fn test_opacity_multiplies_down_the_tree() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(2))
        .opacity(0.0)
        .child(
            Element::box_()
                .id("child")
                .style(Style::new().background(Color::black())),
        );

    let buf = render(&root, 4, 2);
    assert_eq!(bg_at(&buf, 1, 1), Rgb::WHITE);
}

#[test]
fn test_color_alpha_is_respected() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(4))
        .height(Size::Fixed(2))
        .style(Style::new().background(Color::black().alpha(0.0)));

    let buf = render(&root, 4, 2);
    assert_eq!(bg_at(&buf, 0, 0), Rgb::WHITE);
}

// ============================================================================
// Border and Text Tests
// ============================================================================

#[test]
fn test_rounded_border_glyphs() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(5))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Rounded));

    let buf = render(&root, 5, 3);
    assert_eq!(buf.row_text(0), "╭───╮");
    assert_eq!(buf.row_text(1), "│   │");
    assert_eq!(buf.row_text(2), "╰───╯");
}

#[test]
fn test_text_truncated_with_ellipsis() {
    let root = Element::text("abcdefgh")
        .id("label")
        .width(Size::Fixed(5))
        .height(Size::Fixed(1));

    let buf = render(&root, 8, 1);
    assert_eq!(buf.row_text(0), "abcd…   ");
}

#[test]
fn test_centered_text() {
    let root = Element::text("ab")
        .id("label")
        .width(Size::Fixed(6))
        .height(Size::Fixed(1))
        .text_align(dropdom::TextAlign::Center);

    let buf = render(&root, 6, 1);
    assert_eq!(buf.row_text(0), "  ab  ");
}

#[test]
fn test_rule_spans_inner_width() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(8))
        .height(Size::Fixed(1))
        .child(Element::rule('─').id("sep").margin(dropdom::Edges::horizontal(2)));

    let buf = render(&root, 8, 1);
    assert_eq!(buf.row_text(0), "  ────  ");
}

// ============================================================================
// Clipping Tests
// ============================================================================

fn rows_in(overflow: Overflow) -> Element {
    Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(10))
        .child(
            Element::col()
                .id("list")
                .height(Size::Fixed(4))
                .overflow(overflow)
                .children((0..4).map(|i| {
                    Element::text(format!("row{i}"))
                        .id(format!("row-{i}"))
                        .height(Size::Fixed(2))
                })),
        )
}

#[test]
fn test_scroll_container_clips_children() {
    let buf = render(&rows_in(Overflow::Scroll), 10, 10);

    assert!(buf.row_text(0).starts_with("row0"));
    assert!(buf.row_text(2).starts_with("row1"));
    assert!(!buf.row_text(4).contains("row2"), "outside the viewport");
}

#[test]
fn test_scrolled_content_paints_inside_viewport() {
    let mut root = rows_in(Overflow::Scroll);
    if let dropdom::Content::Children(children) = &mut root.content {
        children[0].scroll_offset = (0, 4);
    }

    let buf = render(&root, 10, 10);
    assert!(buf.row_text(0).starts_with("row2"));
    assert!(buf.row_text(2).starts_with("row3"));
}

#[test]
fn test_scrollbar_drawn_on_right_border() {
    let root = Element::col()
        .id("list")
        .width(Size::Fixed(10))
        .height(Size::Fixed(6))
        .overflow(Overflow::Scroll)
        .style(Style::new().border(Border::Rounded))
        .children((0..6).map(|i| Element::box_().id(format!("item-{i}")).height(Size::Fixed(2))));

    let buf = render(&root, 10, 6);
    // 4 visible rows of 12: thumb is 1 row at the top of the track
    assert_eq!(buf.get(9, 1).unwrap().char, '┃');
    assert_eq!(buf.get(9, 2).unwrap().char, '│');
}
