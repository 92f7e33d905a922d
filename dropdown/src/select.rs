//! A concrete select built on [`DropdownToggle`].

use dropdom::{Border, Color, Edges, Element, Event, Overflow, Size, Style, TextAlign};

use crate::binding::Binding;
use crate::toggle::DropdownToggle;

/// Background of the highlighted option row.
pub const APP_GREY: Color = Color::Rgb {
    r: 229,
    g: 229,
    b: 234,
};

/// Caption shown under the select.
pub const CAPTION: &str = "Some text....";

/// Option selected on first appearance when nothing is selected yet.
const DEFAULT_INDEX: usize = 2;

const INSET: u16 = 6;
const CONTROL_HEIGHT: u16 = 3;
const PANEL_HEIGHT: u16 = 12;
const ROW_HEIGHT: u16 = 2;
const SEPARATOR_INSET: u16 = 3;

/// Direction indicator at the trailing edge of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    Down,
    Up,
}

impl Chevron {
    pub fn for_visibility(visible: bool) -> Self {
        if visible { Chevron::Up } else { Chevron::Down }
    }

    pub fn glyph(self) -> char {
        match self {
            Chevron::Down => '▼',
            Chevron::Up => '▲',
        }
    }
}

/// Select with a fixed option list.
///
/// Owns the visibility flag and the selection and lends the flag to its
/// [`DropdownToggle`]. Option rows bypass the toggle: choosing one stores
/// the label and closes the dropdown directly.
#[derive(Debug, Clone)]
pub struct SampleSelect {
    visible: bool,
    selected: Option<String>,
    options: Vec<String>,
    toggle: DropdownToggle,
    appeared: bool,
}

impl Default for SampleSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSelect {
    /// `Option 1` through `Option 6`.
    pub fn new() -> Self {
        Self::with_options((1..=6).map(|i| format!("Option {i}")).collect())
    }

    pub fn with_options(options: Vec<String>) -> Self {
        Self {
            visible: false,
            selected: None,
            options,
            toggle: DropdownToggle::new("select"),
            appeared: false,
        }
    }

    /// Replace the toggle, e.g. to change its id or timing.
    pub fn with_toggle(mut self, toggle: DropdownToggle) -> Self {
        self.toggle = toggle;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn toggle(&self) -> &DropdownToggle {
        &self.toggle
    }

    /// Visibility flag as handed to the toggle.
    pub fn visibility(&mut self) -> Binding<'_, Self, bool> {
        Binding::new(self, |s| s.visible, |s, visible| s.visible = visible)
    }

    /// First-appearance hook. Later calls do nothing.
    pub fn on_appear(&mut self) {
        if std::mem::replace(&mut self.appeared, true) {
            return;
        }
        if self.selected.is_none() {
            self.selected = self.options.get(DEFAULT_INDEX).cloned();
            log::debug!("[select] default selection {:?}", self.selected);
        }
    }

    /// Choose the option at `index` and close the dropdown.
    /// Returns false if there is no such option.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(label) = self.options.get(index) else {
            return false;
        };
        log::debug!("[select] selected {label:?}");
        self.selected = Some(label.clone());
        self.visible = false;
        true
    }

    pub fn option_id(&self, index: usize) -> String {
        format!("{}-option-{index}", self.toggle.id())
    }

    fn option_index(&self, id: &str) -> Option<usize> {
        (0..self.options.len()).find(|&i| self.option_id(i) == id)
    }

    /// Apply a click on the control or on an option row.
    pub fn handle(&mut self, event: &Event) -> bool {
        let toggle = self.toggle.clone();
        if toggle.handle(event, &mut self.visibility()) {
            return true;
        }

        match event.clicked().and_then(|target| self.option_index(target)) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// The select above the caption, on a white page.
    pub fn view(&self) -> Element {
        Element::col()
            .id("sample-select")
            .style(Style::new().background(Color::white()))
            .child(self.toggle.view(
                self.visible,
                || self.control_view(),
                || self.dropdown_view(),
            ))
            .child(
                Element::text(CAPTION)
                    .id("sample-select-caption")
                    .height(Size::Fixed(1))
                    .style(Style::new().foreground(Color::black())),
            )
    }

    /// Bordered field with the current label and the chevron.
    pub fn control_view(&self) -> Element {
        let id = self.toggle.id();
        let text = Style::new().foreground(Color::black());

        Element::row()
            .id(format!("{id}-field"))
            .height(Size::Fixed(CONTROL_HEIGHT))
            .margin(Edges::horizontal(INSET))
            .style(frame_style())
            .child(
                Element::text(self.selected().unwrap_or(""))
                    .id(format!("{id}-label"))
                    .width(Size::Fill)
                    .padding(Edges::left(1))
                    .style(text),
            )
            .child(
                Element::text(Chevron::for_visibility(self.visible).glyph().to_string())
                    .id(format!("{id}-chevron"))
                    .width(Size::Fixed(1))
                    .margin(Edges::right(1))
                    .style(text),
            )
    }

    /// Scrollable panel with one row per option.
    pub fn dropdown_view(&self) -> Element {
        Element::col()
            .id(format!("{}-list", self.toggle.id()))
            .height(Size::Fixed(PANEL_HEIGHT))
            .margin(Edges::horizontal(INSET))
            .overflow(Overflow::Scroll)
            .style(frame_style().background(Color::white()))
            .children(
                self.options
                    .iter()
                    .enumerate()
                    .map(|(index, label)| self.option_row(index, label)),
            )
    }

    fn option_row(&self, index: usize, label: &str) -> Element {
        let id = self.option_id(index);
        let background = if self.selected() == Some(label) {
            APP_GREY
        } else {
            Color::white()
        };
        let is_last = index + 1 == self.options.len();

        let separator = (!is_last).then(|| {
            Element::rule('─')
                .id(format!("{id}-separator"))
                .margin(Edges::horizontal(SEPARATOR_INSET))
                .style(Style::new().foreground(Color::gray().alpha(0.2)))
        });

        Element::col()
            .id(id.clone())
            .height(Size::Fixed(ROW_HEIGHT))
            .clickable(true)
            .child(
                Element::text(label)
                    .id(format!("{id}-label"))
                    .height(Size::Fixed(1))
                    .text_align(TextAlign::Center)
                    .style(Style::new().background(background).foreground(Color::gray())),
            )
            .children(separator)
    }
}

fn frame_style() -> Style {
    Style::new()
        .border(Border::Rounded)
        .border_color(Color::gray().alpha(0.5))
}
