use std::time::Instant;

use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};
use dropdom::{
    hit_test, translate_events, AnimationState, Anchor, Color, Element, Event, Key,
    LayoutResult, Modifiers, MouseButton, Rect, Size, Style, Transitions,
};

fn layout_of(root: &Element) -> LayoutResult {
    dropdom::layout(root, Rect::new(0, 0, 20, 12))
}

/// A raised control with an option panel hanging below it, over a clickable sibling.
fn overlay_tree(panel_background: bool) -> Element {
    let style = if panel_background {
        Style::new().background(Color::white())
    } else {
        Style::new()
    };

    Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(12))
        .child(
            Element::box_()
                .id("wrap")
                .height(Size::Fixed(3))
                .z_index(1)
                .child(Element::box_().id("control").height(Size::Fixed(3)).clickable(true))
                .child(
                    Element::col()
                        .id("panel")
                        .anchored(Anchor::BottomLeading)
                        .width(Size::Fill)
                        .height(Size::Fixed(4))
                        .style(style)
                        .child(Element::box_().id("opt").height(Size::Fixed(1)).clickable(true)),
                ),
        )
        .child(Element::box_().id("below").height(Size::Fixed(5)).clickable(true))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Hit Testing Tests
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = overlay_tree(true);
    let layout = layout_of(&root);

    assert_eq!(hit_test(&layout, &root, 5, 1), Some("control".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 3), Some("opt".to_string()));
}

#[test]
fn test_hit_test_returns_clickable_ancestor() {
    let root = Element::row()
        .id("button")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .clickable(true)
        .child(Element::text("go").id("label").width(Size::Fixed(2)));
    let layout = layout_of(&root);

    assert_eq!(hit_test(&layout, &root, 0, 0), Some("button".to_string()));
    assert_eq!(hit_test(&layout, &root, 9, 0), Some("button".to_string()));
}

#[test]
fn test_hit_test_opaque_overlay_blocks_underneath() {
    let root = overlay_tree(true);
    let layout = layout_of(&root);

    // Inside the panel but not on an option, over the clickable sibling
    assert_eq!(hit_test(&layout, &root, 5, 5), None);
    // Past the panel the sibling is reachable again
    assert_eq!(hit_test(&layout, &root, 5, 7), Some("below".to_string()));
}

#[test]
fn test_hit_test_transparent_overlay_passes_through() {
    let root = overlay_tree(false);
    let layout = layout_of(&root);

    assert_eq!(hit_test(&layout, &root, 5, 5), Some("below".to_string()));
}

#[test]
fn test_hit_test_outside_everything() {
    let root = overlay_tree(true);
    let layout = layout_of(&root);

    assert_eq!(hit_test(&layout, &root, 5, 11), None);
    assert_eq!(hit_test(&layout, &root, 30, 30), None);
}

#[test]
fn test_fading_out_element_is_not_hit() {
    let panel = || {
        Element::box_()
            .id("ghost")
            .height(Size::Fixed(2))
            .clickable(true)
            .style(Style::new().background(Color::black()))
            .transitions(Transitions::new().presence(
                std::time::Duration::from_millis(200),
                dropdom::Easing::EaseOut,
            ))
    };
    let root_with = Element::col().id("root").child(panel());
    let root_without = Element::col()
        .id("root")
        .child(Element::box_().id("under").height(Size::Fixed(2)).clickable(true));

    let mut state = AnimationState::new();
    let t0 = Instant::now();
    let area = Rect::new(0, 0, 20, 12);
    dropdom::draw(&root_with, area, &mut state, t0);
    let (layout, _) = dropdom::draw(&root_without, area, &mut state, t0);

    assert!(state.is_exiting("ghost"));
    assert_eq!(hit_test(&layout, &root_without, 0, 0), Some("under".to_string()));
}

// ============================================================================
// Event Translation Tests
// ============================================================================

#[test]
fn test_click_is_targeted_through_hit_test() {
    let root = overlay_tree(true);
    let layout = layout_of(&root);

    let events = translate_events(
        &[mouse(MouseEventKind::Down(CtMouseButton::Left), 2, 3)],
        &root,
        &layout,
    );

    assert_eq!(
        events,
        vec![Event::Click {
            target: Some("opt".to_string()),
            x: 2,
            y: 3,
            button: MouseButton::Left,
        }]
    );
    assert_eq!(events[0].clicked(), Some("opt"));
}

#[test]
fn test_right_click_is_not_a_left_click() {
    let root = overlay_tree(true);
    let layout = layout_of(&root);

    let events = translate_events(
        &[mouse(MouseEventKind::Down(CtMouseButton::Right), 2, 1)],
        &root,
        &layout,
    );

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].clicked(), None);
}

#[test]
fn test_wheel_becomes_scroll_delta() {
    let root = overlay_tree(true);
    let layout = layout_of(&root);

    let events = translate_events(
        &[
            mouse(MouseEventKind::ScrollDown, 4, 6),
            mouse(MouseEventKind::ScrollUp, 4, 6),
            mouse(MouseEventKind::Moved, 4, 6),
        ],
        &root,
        &layout,
    );

    assert_eq!(
        events,
        vec![
            Event::Scroll { x: 4, y: 6, delta_x: 0, delta_y: 1 },
            Event::Scroll { x: 4, y: 6, delta_x: 0, delta_y: -1 },
        ]
    );
}

#[test]
fn test_key_release_dropped() {
    let root = overlay_tree(true);
    let layout = layout_of(&root);

    let events = translate_events(
        &[
            CtEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            CtEvent::Key(KeyEvent::new_with_kind(
                KeyCode::Char('q'),
                KeyModifiers::NONE,
                KeyEventKind::Release,
            )),
            CtEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ],
        &root,
        &layout,
    );

    assert_eq!(
        events,
        vec![
            Event::Key { key: Key::Char('q'), modifiers: Modifiers::new() },
            Event::Key { key: Key::Char('c'), modifiers: Modifiers::ctrl() },
        ]
    );
}

#[test]
fn test_resize_passes_through() {
    let root = overlay_tree(true);
    let layout = layout_of(&root);

    let events = translate_events(&[CtEvent::Resize(80, 24)], &root, &layout);
    assert_eq!(events, vec![Event::Resize { width: 80, height: 24 }]);
}

#[test]
fn test_synthetic_click_helper() {
    assert_eq!(Event::click("control").clicked(), Some("control"));
}
