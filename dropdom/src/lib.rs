//! Retained-mode terminal UI: an element tree that is rebuilt from
//! application state every frame, laid out with a small flex engine and
//! painted into a cell buffer that is diffed onto the terminal.

pub mod animation;
pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::AnimationState;
pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element};
pub use event::{translate_events, Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{layout, LayoutResult, Rect};
pub use render::{draw, render_to_buffer};
pub use scroll::{ScrollOffset, ScrollState};
pub use terminal::Terminal;
pub use transitions::{Easing, TransitionConfig, Transitions};
pub use types::*;
