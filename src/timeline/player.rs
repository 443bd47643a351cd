use crate::errors::Result;
use crate::timeline::evaluate::evaluate;
use crate::timeline::intervals::{IntervalNode, compile};
use crate::timeline::tree::{TrackNode, ValueNode};
use crate::utils::time::Clock;

/// Host callback fired at the end of every `seek` with the freshly
/// evaluated value tree.
pub type ChangeCallback = Box<dyn FnMut(&ValueNode)>;

/// Host callback fired once per natural completion of a `play`/`reverse`
/// run. Never fired by `pause`.
pub type CompleteCallback = Box<dyn FnMut()>;

/// Playback state of a [`Timeline`].
///
/// Only one driver can be active at a time: `play`/`reverse` are silently
/// ignored while the state is `Playing` or `Reversing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No driver active; the timeline sits at its current timestamp.
    Idle,
    /// Timestamp advances with the clock.
    Playing,
    /// Timestamp runs backwards with the clock, floored at 0.
    Reversing,
    /// Driver suspended; timestamp frozen where `pause` caught it.
    Paused,
}

/// Outcome of a single [`Timeline::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// No driver active; nothing was evaluated.
    Idle,
    /// A driver advanced the timeline; more ticks are wanted.
    Running,
    /// This tick finished the run; the completion callback has fired.
    Completed,
}

/// A compiled, playable timeline.
///
/// Owns the mutable value tree (a deep copy of the initial tree handed to
/// [`Timeline::new`]) and the immutable interval tree compiled from the
/// definition. The host drives playback by calling [`tick`](Self::tick)
/// once per frame; the state machine guarantees at most one active driver.
pub struct Timeline {
    values: ValueNode,
    intervals: IntervalNode,
    state: PlaybackState,
    timestamp: f32,
    /// Timestamp captured when the current driver started.
    timestamp_on_play: f32,
    /// Clock reading captured when the current driver started.
    played_at: f32,
    clock: Box<dyn Clock>,
    on_change: Option<ChangeCallback>,
    on_complete: Option<CompleteCallback>,
}

impl Timeline {
    /// Compiles `definition` against `initial` and wraps the result in an
    /// idle timeline at timestamp 0.
    ///
    /// `initial` is deep-copied, so the live value tree never aliases
    /// caller-owned data.
    pub fn new(
        initial: &ValueNode,
        definition: &TrackNode,
        clock: impl Clock + 'static,
    ) -> Result<Self> {
        let intervals = compile(initial, definition)?;
        Ok(Self {
            values: initial.clone(),
            intervals,
            state: PlaybackState::Idle,
            timestamp: 0.0,
            timestamp_on_play: 0.0,
            played_at: 0.0,
            clock: Box::new(clock),
            on_change: None,
            on_complete: None,
        })
    }

    /// Registers the per-frame value-change callback.
    pub fn set_on_change(&mut self, callback: impl FnMut(&ValueNode) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Registers the completion callback.
    pub fn set_on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// The live value tree. Reflects the state of the last `seek`; identical
    /// to the snapshot passed to the change callback.
    #[must_use]
    pub fn values(&self) -> &ValueNode {
        &self.values
    }

    /// Leaf value at a `.`-separated path.
    #[must_use]
    pub fn value(&self, path: &str) -> Option<f32> {
        self.values.get(path)
    }

    #[must_use]
    pub fn timestamp(&self) -> f32 {
        self.timestamp
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True while a driver (forward or reverse) is active.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(
            self.state,
            PlaybackState::Playing | PlaybackState::Reversing
        )
    }

    /// Evaluates the timeline at an arbitrary timestamp.
    ///
    /// Mutates the value tree, fires the change callback, and returns
    /// whether every track has reached its terminal value. Callable at any
    /// time in any state; playback state is untouched.
    pub fn seek(&mut self, timestamp: f32) -> bool {
        if timestamp < 0.0 {
            log::warn!("seek to negative timestamp {timestamp}ms; tracks resolve to their final values");
        }
        self.timestamp = timestamp;
        let completed = evaluate(timestamp, &self.intervals, &mut self.values);
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&self.values);
        }
        completed
    }

    /// Starts advancing the timestamp from its current value.
    ///
    /// Ignored while another driver is active, so overlapping `play`/
    /// `reverse` calls can never double-drive the timeline.
    pub fn play(&mut self) {
        if self.is_playing() {
            log::debug!("play() ignored: a driver is already active");
            return;
        }
        self.timestamp_on_play = self.timestamp;
        self.played_at = self.clock.now_ms();
        self.state = PlaybackState::Playing;
        log::debug!("playing from {}ms", self.timestamp);
    }

    /// Starts running the timestamp backwards towards 0.
    pub fn reverse(&mut self) {
        if self.is_playing() {
            log::debug!("reverse() ignored: a driver is already active");
            return;
        }
        self.timestamp_on_play = self.timestamp;
        self.played_at = self.clock.now_ms();
        self.state = PlaybackState::Reversing;
        log::debug!("reversing from {}ms", self.timestamp);
    }

    /// Suspends the active driver, freezing the timestamp in place.
    ///
    /// No-op when no driver is active. Never fires the completion callback.
    pub fn pause(&mut self) {
        if self.is_playing() {
            self.state = PlaybackState::Paused;
            log::debug!("paused at {}ms", self.timestamp);
        }
    }

    /// Advances the active driver by one frame.
    ///
    /// The host calls this once per frame (directly or through a
    /// [`TimelineMixer`](super::TimelineMixer)). Returns
    /// [`Playback::Running`] while more frames are wanted.
    pub fn tick(&mut self) -> Playback {
        match self.state {
            PlaybackState::Idle | PlaybackState::Paused => Playback::Idle,
            PlaybackState::Playing => {
                let elapsed = self.clock.now_ms() - self.played_at;
                let completed = self.seek(self.timestamp_on_play + elapsed);
                if completed {
                    self.finish();
                    Playback::Completed
                } else {
                    Playback::Running
                }
            }
            PlaybackState::Reversing => {
                let elapsed = self.clock.now_ms() - self.played_at;
                // floor at 0 so the stop condition below is always reached
                let timestamp = (self.timestamp_on_play - elapsed).max(0.0);
                self.seek(timestamp);

                // Reverse deliberately stops on "timestamp reached 0", not on
                // the evaluator's completion signal; see DESIGN.md.
                if timestamp > 0.0 {
                    Playback::Running
                } else {
                    self.finish();
                    Playback::Completed
                }
            }
        }
    }

    fn finish(&mut self) {
        self.state = PlaybackState::Idle;
        log::debug!("playback completed at {}ms", self.timestamp);
        if let Some(on_complete) = self.on_complete.as_mut() {
            on_complete();
        }
    }
}
