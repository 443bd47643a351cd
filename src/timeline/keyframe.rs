use crate::easing::Easing;

/// One authored segment of a track's evolution.
///
/// `duration` is in milliseconds and must be non-negative; `value` is the
/// absolute target reached at the end of the segment. The segment's start
/// value is implicit: the previous keyframe's target, or the track's initial
/// value for the first keyframe.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    pub duration: f32,
    pub value: f32,
    pub easing: Easing,
}

impl Keyframe {
    #[must_use]
    pub fn new(duration: f32, value: f32, easing: Easing) -> Self {
        debug_assert!(duration >= 0.0, "keyframe duration must be non-negative");
        Self {
            duration,
            value,
            easing,
        }
    }

    /// Keyframe with linear easing.
    #[must_use]
    pub fn linear(duration: f32, value: f32) -> Self {
        Self::new(duration, value, Easing::Linear)
    }
}
