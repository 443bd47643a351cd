use slotmap::{SlotMap, new_key_type};

use crate::timeline::player::{Playback, Timeline};

new_key_type! {
    /// Handle to a timeline registered with a [`TimelineMixer`].
    pub struct TimelineKey;
}

/// Drives several independent timelines from one host loop.
///
/// Timelines share no state and complete independently; the mixer only
/// fans one `update` call out to every registered timeline and reports
/// whether any of them still wants frames (the host's redraw signal).
#[derive(Default)]
pub struct TimelineMixer {
    timelines: SlotMap<TimelineKey, Timeline>,
}

impl TimelineMixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, timeline: Timeline) -> TimelineKey {
        self.timelines.insert(timeline)
    }

    pub fn remove(&mut self, key: TimelineKey) -> Option<Timeline> {
        self.timelines.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: TimelineKey) -> Option<&Timeline> {
        self.timelines.get(key)
    }

    pub fn get_mut(&mut self, key: TimelineKey) -> Option<&mut Timeline> {
        self.timelines.get_mut(key)
    }

    /// Ticks every registered timeline once. Returns `true` while at least
    /// one timeline is still running.
    pub fn update(&mut self) -> bool {
        let mut any_running = false;
        for (_, timeline) in &mut self.timelines {
            if timeline.tick() == Playback::Running {
                any_running = true;
            }
        }
        any_running
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timelines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }
}
