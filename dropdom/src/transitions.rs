use std::time::Duration;

/// Duration and easing for one animated property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `0.0..=1.0` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Which changes of an element are animated.
///
/// `opacity` covers value changes of an element that stays in the tree.
/// `presence` fades the element in when it first appears and keeps it on
/// screen while it fades out after removal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transitions {
    pub opacity: Option<TransitionConfig>,
    pub presence: Option<TransitionConfig>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, duration: Duration, easing: Easing) -> Self {
        self.opacity = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn presence(mut self, duration: Duration, easing: Easing) -> Self {
        self.presence = Some(TransitionConfig::new(duration, easing));
        self
    }
}
