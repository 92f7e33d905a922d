use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::Element;
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// High-level events with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key {
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse press. `target` is the clickable element under the pointer.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    Scroll {
        x: u16,
        y: u16,
        delta_x: i16,
        delta_y: i16,
    },
    Resize {
        width: u16,
        height: u16,
    },
}

impl Event {
    /// Left click on the element with the given id.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// Id of the clicked element, for left clicks only.
    pub fn clicked(&self) -> Option<&str> {
        match self {
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => Some(target),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Turn raw terminal events into targeted events.
///
/// Clicks are resolved against the tree and layout that are currently on
/// screen; key releases and mouse moves are dropped.
pub fn translate_events(raw: &[CrosstermEvent], root: &Element, layout: &LayoutResult) -> Vec<Event> {
    let mut events = Vec::with_capacity(raw.len());

    for raw_event in raw {
        match raw_event {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                events.push(Event::Key {
                    key: key_event.code.into(),
                    modifiers: key_event.modifiers.into(),
                });
            }
            CrosstermEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                let scroll = |delta_x, delta_y| Event::Scroll {
                    x,
                    y,
                    delta_x,
                    delta_y,
                };
                match mouse.kind {
                    MouseEventKind::Down(button) => {
                        let target = hit_test(layout, root, x, y);
                        log::debug!("[event] click at ({x}, {y}) -> {target:?}");
                        events.push(Event::Click {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                    MouseEventKind::ScrollUp => events.push(scroll(0, -1)),
                    MouseEventKind::ScrollDown => events.push(scroll(0, 1)),
                    MouseEventKind::ScrollLeft => events.push(scroll(-1, 0)),
                    MouseEventKind::ScrollRight => events.push(scroll(1, 0)),
                    _ => {}
                }
            }
            CrosstermEvent::Resize(width, height) => events.push(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => {}
        }
    }

    events
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
