use dropdom::{Border, Element, Event, LayoutResult, Overflow, Rect, ScrollOffset, ScrollState, Size, Style};

fn list() -> Element {
    Element::col()
        .id("root")
        .width(Size::Fixed(30))
        .height(Size::Fixed(20))
        .child(
            Element::col()
                .id("list")
                .width(Size::Fixed(20))
                .height(Size::Fixed(6))
                .overflow(Overflow::Scroll)
                .style(Style::new().border(Border::Rounded))
                .children((0..6).map(|i| Element::box_().id(format!("item-{i}")).height(Size::Fixed(2)))),
        )
}

fn layout_of(root: &Element) -> LayoutResult {
    dropdom::layout(root, Rect::new(0, 0, 30, 20))
}

fn wheel(delta_y: i16) -> Event {
    Event::Scroll {
        x: 2,
        y: 2,
        delta_x: 0,
        delta_y,
    }
}

// ============================================================================
// Wheel Handling Tests
// ============================================================================

#[test]
fn test_wheel_scrolls_container_under_pointer() {
    let root = list();
    let layout = layout_of(&root);
    let mut scroll = ScrollState::new();

    assert!(scroll.handle(&wheel(1), &root, &layout));
    assert_eq!(scroll.get("list"), ScrollOffset::new(0, 1));
}

#[test]
fn test_scroll_clamped_to_content_minus_viewport() {
    let root = list();
    let layout = layout_of(&root);
    let mut scroll = ScrollState::new();

    for _ in 0..20 {
        scroll.handle(&wheel(1), &root, &layout);
    }

    // 12 rows of content in a 4 row viewport
    assert_eq!(scroll.get("list").y, 8);
    assert!(!scroll.handle(&wheel(1), &root, &layout), "already at the end");
}

#[test]
fn test_scroll_up_at_top_not_consumed() {
    let root = list();
    let layout = layout_of(&root);
    let mut scroll = ScrollState::new();

    assert!(!scroll.handle(&wheel(-1), &root, &layout));
    assert_eq!(scroll.get("list"), ScrollOffset::default());
}

#[test]
fn test_wheel_outside_scroll_container_ignored() {
    let root = list();
    let layout = layout_of(&root);
    let mut scroll = ScrollState::new();

    let event = Event::Scroll {
        x: 25,
        y: 15,
        delta_x: 0,
        delta_y: 1,
    };
    assert!(!scroll.handle(&event, &root, &layout));
}

#[test]
fn test_non_scroll_events_ignored() {
    let root = list();
    let layout = layout_of(&root);
    let mut scroll = ScrollState::new();

    assert!(!scroll.handle(&Event::click("item-0"), &root, &layout));
}

// ============================================================================
// Apply Tests
// ============================================================================

#[test]
fn test_apply_stamps_offsets_onto_new_tree() {
    let mut scroll = ScrollState::new();
    scroll.set("list", 0, 8);

    let mut root = list();
    scroll.apply(&mut root);
    let layout = layout_of(&root);

    let list = dropdom::find_element(&root, "list").unwrap();
    assert_eq!(list.scroll_offset, (0, 8));
    // Content row 10 minus offset 8, below the top border
    assert_eq!(layout.get("item-5").unwrap().y, 3);
}

#[test]
fn test_apply_leaves_other_elements_alone() {
    let mut scroll = ScrollState::new();
    scroll.set("root", 0, 5);

    let mut root = list();
    scroll.apply(&mut root);

    assert_eq!(root.scroll_offset, (0, 0), "root does not scroll");
}

#[test]
fn test_apply_forgets_offset_of_unmounted_container() {
    let mut scroll = ScrollState::new();
    scroll.set("list", 0, 8);

    let mut without = Element::col().id("root");
    scroll.apply(&mut without);
    assert_eq!(scroll.get("list"), ScrollOffset::default());

    let mut root = list();
    scroll.apply(&mut root);
    let list = dropdom::find_element(&root, "list").unwrap();
    assert_eq!(list.scroll_offset, (0, 0), "remounted at the top");
}
