use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::element::Element;
use crate::layout::LayoutResult;
use crate::transitions::{Easing, TransitionConfig};

/// A single running opacity transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from: f32,
    pub to: f32,
    pub start: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Fade {
    fn new(from: f32, to: f32, config: TransitionConfig, start: Instant) -> Self {
        Self {
            from,
            to,
            start,
            duration: config.duration,
            easing: config.easing,
        }
    }

    /// Linear progress in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// An element removed from the tree that is still fading out.
///
/// Keeps a copy of the subtree and the rects it had on its last frame so
/// the renderer can keep drawing it. Exiting elements never receive input.
#[derive(Debug, Clone)]
pub struct Exiting {
    pub element: Element,
    pub layout: LayoutResult,
    pub z_index: i16,
    /// Opacity inherited from the ancestors it had when it was removed.
    pub inherited_opacity: f32,
    pub fade: Fade,
}

impl Exiting {
    pub fn opacity(&self, now: Instant) -> f32 {
        self.inherited_opacity * self.fade.value_at(now)
    }
}

/// What a presence-animated element looked like on the previous frame.
#[derive(Debug, Clone)]
struct PresenceSnapshot {
    element: Element,
    layout: LayoutResult,
    z_index: i16,
    inherited_opacity: f32,
    config: TransitionConfig,
}

/// Drives opacity transitions across frames.
///
/// Every frame the caller hands over the freshly built tree and its layout.
/// Comparing against the previous frame, the state starts a fade when an
/// element's `opacity` changes (if it has an opacity transition), when a
/// presence-animated element appears, and when one disappears. Changing
/// direction mid-fade restarts from the currently displayed value instead
/// of queuing behind the running fade.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Target opacity per element on the previous frame.
    snapshots: HashMap<String, f32>,
    /// Running opacity-property fades.
    active: HashMap<String, Fade>,
    /// Running fade-ins of presence-animated elements.
    entering: HashMap<String, Fade>,
    /// Presence-animated elements from the previous frame.
    present: HashMap<String, PresenceSnapshot>,
    exiting: HashMap<String, Exiting>,
    frames: u64,
    /// When set every change applies immediately.
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled {
            self.active.clear();
            self.entering.clear();
            self.exiting.clear();
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// True while anything is still fading; the event loop keeps ticking until then.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty() || !self.entering.is_empty() || !self.exiting.is_empty()
    }

    /// Compare the new frame with the previous one and schedule fades.
    pub fn update(&mut self, root: &Element, layout: &LayoutResult, now: Instant) {
        self.active.retain(|_, fade| !fade.is_done(now));
        self.entering.retain(|_, fade| !fade.is_done(now));
        self.exiting.retain(|id, exiting| {
            let done = exiting.fade.is_done(now);
            if done {
                log::debug!("[animation] {id} finished fading out");
            }
            !done
        });

        let mut snapshots = HashMap::with_capacity(self.snapshots.len());
        let mut present = HashMap::new();
        self.visit(root, layout, now, root.z_index, 1.0, &mut snapshots, &mut present);

        // Presence elements that were here last frame and are gone now
        let removed: Vec<String> = self
            .present
            .keys()
            .filter(|id| !present.contains_key(*id))
            .cloned()
            .collect();
        for id in removed {
            let Some(snapshot) = self.present.remove(&id) else {
                continue;
            };
            let shown = self
                .entering
                .remove(&id)
                .map_or(1.0, |fade| fade.value_at(now));
            if self.reduced_motion {
                continue;
            }
            log::debug!("[animation] {id} removed, fading out from {shown:.2}");
            self.exiting.insert(
                id,
                Exiting {
                    element: snapshot.element,
                    layout: snapshot.layout,
                    z_index: snapshot.z_index,
                    inherited_opacity: snapshot.inherited_opacity,
                    fade: Fade::new(shown, 0.0, snapshot.config, now),
                },
            );
        }

        self.active.retain(|id, _| snapshots.contains_key(id));
        self.entering.retain(|id, _| snapshots.contains_key(id));
        self.snapshots = snapshots;
        self.present = present;
        self.frames += 1;
    }

    #[allow(clippy::too_many_arguments)]
    fn visit(
        &mut self,
        element: &Element,
        layout: &LayoutResult,
        now: Instant,
        parent_z: i16,
        inherited_opacity: f32,
        snapshots: &mut HashMap<String, f32>,
        present: &mut HashMap<String, PresenceSnapshot>,
    ) {
        let id = &element.id;
        let z = element.z_index.max(parent_z);

        if let (Some(config), Some(&previous)) = (element.transitions.opacity, self.snapshots.get(id)) {
            if previous != element.opacity {
                if self.reduced_motion {
                    self.active.remove(id);
                } else {
                    let from = self
                        .active
                        .get(id)
                        .map_or(previous, |fade| fade.value_at(now));
                    log::debug!("[animation] {id} opacity {from:.2} -> {:.2}", element.opacity);
                    self.active
                        .insert(id.clone(), Fade::new(from, element.opacity, config, now));
                }
            }
        }
        snapshots.insert(id.clone(), element.opacity);

        if let Some(config) = element.transitions.presence {
            let mounted = self.frames > 0 && !self.present.contains_key(id);
            if mounted && !self.reduced_motion {
                // Re-entering mid fade-out picks up from what is on screen.
                let from = self
                    .exiting
                    .remove(id)
                    .map_or(0.0, |exiting| exiting.fade.value_at(now));
                log::debug!("[animation] {id} mounted, fading in from {from:.2}");
                self.entering
                    .insert(id.clone(), Fade::new(from, 1.0, config, now));
            } else {
                self.exiting.remove(id);
            }
            present.insert(
                id.clone(),
                PresenceSnapshot {
                    element: element.clone(),
                    layout: subtree_layout(element, layout),
                    z_index: z,
                    inherited_opacity,
                    config,
                },
            );
        }

        let opacity = inherited_opacity * element.opacity;
        for child in element.content.children() {
            self.visit(child, layout, now, z, opacity, snapshots, present);
        }
    }

    /// Displayed value of an element's own opacity.
    pub fn opacity(&self, id: &str, target: f32, now: Instant) -> f32 {
        self.active
            .get(id)
            .map_or(target, |fade| fade.value_at(now))
    }

    /// Presence multiplier of an element: below 1.0 only while fading in.
    pub fn presence(&self, id: &str, now: Instant) -> f32 {
        self.entering.get(id).map_or(1.0, |fade| fade.value_at(now))
    }

    /// Removed elements still on screen.
    pub fn exiting(&self) -> impl Iterator<Item = &Exiting> {
        self.exiting.values()
    }

    pub fn is_exiting(&self, id: &str) -> bool {
        self.exiting.contains_key(id)
    }
}

/// Rects for `element` and its descendants only.
fn subtree_layout(element: &Element, layout: &LayoutResult) -> LayoutResult {
    let mut result = LayoutResult::new();
    element.walk(&mut |el| {
        if let Some(rect) = layout.get(&el.id) {
            result.insert(el.id.clone(), *rect);
        }
        if let (Some(content), Some(viewport)) = (layout.content_size(&el.id), layout.viewport_size(&el.id)) {
            result.set_scroll_sizes(&el.id, content, viewport);
        }
    });
    result
}

