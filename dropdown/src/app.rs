//! Observe/update/re-render loop.

use std::time::{Duration, Instant};

use crossterm::event::Event as CrosstermEvent;
use dropdom::{
    translate_events, AnimationState, Buffer, Element, Event, Key, LayoutResult, Rect, ScrollState,
    Terminal,
};

use crate::error::AppError;
use crate::select::SampleSelect;

/// Poll interval while something is animating.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A full-screen view driven by the loop.
///
/// `view` must be a pure function of the screen's state: the loop calls it
/// after every batch of events and on every animation frame.
pub trait Screen {
    fn view(&self) -> Element;

    /// Apply one event. Returns true if the state changed.
    fn handle(&mut self, event: &Event) -> bool;

    /// Called before the first frame.
    fn on_appear(&mut self) {}
}

impl Screen for SampleSelect {
    fn view(&self) -> Element {
        SampleSelect::view(self)
    }

    fn handle(&mut self, event: &Event) -> bool {
        SampleSelect::handle(self, event)
    }

    fn on_appear(&mut self) {
        SampleSelect::on_appear(self)
    }
}

/// What a batch of input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Nothing changed.
    Idle,
    /// At least one event changed state; the frame is stale.
    Changed,
    /// A quit key was pressed. Events after it are dropped.
    Quit,
}

/// A screen plus the per-frame state the host keeps for it.
pub struct App<S> {
    screen: S,
    scroll: ScrollState,
    animation: AnimationState,
}

impl<S: Screen> App<S> {
    pub fn new(screen: S) -> Self {
        Self {
            screen,
            scroll: ScrollState::new(),
            animation: AnimationState::new(),
        }
    }

    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.animation.set_reduced_motion(enabled);
        self
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Fire the screen's appearance hook.
    pub fn appear(&mut self) {
        self.screen.on_appear();
    }

    /// Current tree with stored scroll offsets applied.
    pub fn build(&mut self) -> Element {
        let mut root = self.screen.view();
        self.scroll.apply(&mut root);
        root
    }

    /// Render one frame off-screen at `now`, as the loop would.
    pub fn draw(&mut self, area: Rect, now: Instant) -> (Element, LayoutResult, Buffer) {
        let root = self.build();
        let (layout, buffer) = dropdom::draw(&root, area, &mut self.animation, now);
        (root, layout, buffer)
    }

    /// Route one event: wheel scrolling first, then the screen.
    ///
    /// `root` and `layout` must be the frame the event was translated
    /// against.
    pub fn dispatch(&mut self, event: &Event, root: &Element, layout: &LayoutResult) -> bool {
        if self.scroll.handle(event, root, layout) {
            return true;
        }
        self.screen.handle(event)
    }

    /// Apply a batch of raw input against the frame on display.
    ///
    /// Each event is hit-tested against the tree current at the time it is
    /// handled: once an event changes state the tree is rebuilt and laid
    /// out again in `area`, so a click that opens the dropdown followed by
    /// a click on an option in the same batch lands on the option.
    pub fn handle_input(
        &mut self,
        raw: &[CrosstermEvent],
        root: Element,
        layout: LayoutResult,
        area: Rect,
    ) -> Input {
        let (mut root, mut layout) = (root, layout);
        let mut outcome = Input::Idle;

        for raw_event in raw {
            for event in translate_events(std::slice::from_ref(raw_event), &root, &layout) {
                if is_quit(&event) {
                    log::info!("[app] quit");
                    return Input::Quit;
                }
                if self.dispatch(&event, &root, &layout) {
                    outcome = Input::Changed;
                    root = self.build();
                    layout = dropdom::layout(&root, area);
                }
            }
        }

        outcome
    }

    /// Take over the terminal and run until the user quits.
    pub fn run(&mut self) -> Result<(), AppError> {
        let mut term = Terminal::new()?;
        self.appear();
        log::info!("[app] started");

        loop {
            let root = self.build();
            let layout = term.render(&root, &mut self.animation)?;

            let timeout = self
                .animation
                .has_active_transitions()
                .then_some(FRAME_INTERVAL);
            let raw = term.poll(timeout)?;
            if raw.is_empty() {
                continue;
            }

            let (width, height) = term.size()?;
            if self.handle_input(&raw, root, layout, Rect::from_size(width, height)) == Input::Quit {
                return Ok(());
            }
        }
    }
}

/// `q`, `Esc` or `Ctrl+C`.
pub fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key {
            key: Key::Char('q'),
            modifiers,
        } => modifiers.none(),
        Event::Key {
            key: Key::Char('c'),
            modifiers,
        } => modifiers.ctrl,
        Event::Key {
            key: Key::Escape, ..
        } => true,
        _ => false,
    }
}
