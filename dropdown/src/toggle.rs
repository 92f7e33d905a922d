//! Generic show/hide container: a control plus an overlay hanging below it.

use std::time::Duration;

use dropdom::{Anchor, Easing, Element, Event, Size, Transitions};

use crate::binding::Binding;

/// Fade duration of the control and the overlay.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Control opacity while the dropdown is open.
pub const DEFAULT_OPEN_OPACITY: f32 = 0.7;

/// Presentation of a dropdown whose visibility flag lives elsewhere.
///
/// The toggle never stores `show`. [`DropdownToggle::view`] renders from
/// the current value and [`DropdownToggle::handle`] flips it through a
/// [`Binding`] when the control is clicked. Everything else, including
/// closing after a choice, is up to the content the caller supplies.
///
/// ```
/// use dropdom::{Element, Event};
/// use dropdown::{Binding, DropdownToggle};
///
/// let toggle = DropdownToggle::new("menu");
/// let mut open = false;
/// let mut show = Binding::new(&mut open, |v| *v, |v, value| *v = value);
///
/// assert!(toggle.handle(&Event::click(toggle.control_id()), &mut show));
/// assert!(show.get());
///
/// let tree = toggle.view(show.get(), || Element::text("Pick one"), || Element::text("…"));
/// assert_eq!(tree.id, "menu");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownToggle {
    id: String,
    duration: Duration,
    easing: Easing,
    open_opacity: f32,
}

impl DropdownToggle {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            duration: DEFAULT_DURATION,
            easing: Easing::EaseOut,
            open_opacity: DEFAULT_OPEN_OPACITY,
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn open_opacity(mut self, opacity: f32) -> Self {
        self.open_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the clickable region wrapping the control content.
    pub fn control_id(&self) -> String {
        format!("{}-control", self.id)
    }

    /// Id of the overlay wrapping the dropdown content.
    pub fn dropdown_id(&self) -> String {
        format!("{}-dropdown", self.id)
    }

    /// Control opacity for the given visibility.
    pub fn control_opacity(&self, show: bool) -> f32 {
        if show { self.open_opacity } else { 1.0 }
    }

    /// Build the toggle for the current visibility.
    ///
    /// `dropdown` is only called while `show` is true. The overlay is
    /// anchored to the bottom-leading corner of the control, so it takes no
    /// room in the surrounding layout, and the whole toggle is raised to
    /// z-index 1 to paint over whatever follows it.
    pub fn view(
        &self,
        show: bool,
        control: impl FnOnce() -> Element,
        dropdown: impl FnOnce() -> Element,
    ) -> Element {
        let control = Element::box_()
            .id(self.control_id())
            .height(Size::Auto)
            .clickable(true)
            .opacity(self.control_opacity(show))
            .transitions(Transitions::new().opacity(self.duration, self.easing))
            .child(control());

        let overlay = show.then(|| {
            Element::box_()
                .id(self.dropdown_id())
                .anchored(Anchor::BottomLeading)
                .width(Size::Fill)
                .height(Size::Auto)
                .transitions(Transitions::new().presence(self.duration, self.easing))
                .child(dropdown())
        });

        Element::box_()
            .id(self.id.clone())
            .height(Size::Auto)
            .z_index(1)
            .child(control)
            .children(overlay)
    }

    /// Flip `show` when the control is clicked. Returns true if it was.
    pub fn handle<S>(&self, event: &Event, show: &mut Binding<'_, S, bool>) -> bool {
        if event.clicked() != Some(self.control_id().as_str()) {
            return false;
        }

        let open = show.toggle();
        log::debug!("[dropdown] {} {}", self.id, if open { "opened" } else { "closed" });
        true
    }
}
