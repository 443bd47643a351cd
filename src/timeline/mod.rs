//! Timeline Animation
//!
//! Declarative keyframed animation over nested scalar trees:
//!
//! - [`tree`]: the [`ValueNode`] / [`TrackNode`] tagged-union trees
//! - [`keyframe`]: the authored `(duration, value, easing)` triple
//! - [`intervals`]: one-shot compilation into absolute-timestamp intervals
//! - [`evaluate`]: per-timestamp evaluation of the whole tree
//! - [`player`]: the [`Timeline`] playback state machine
//! - [`mixer`]: driving several independent timelines from one host loop

pub mod evaluate;
pub mod intervals;
pub mod keyframe;
pub mod mixer;
pub mod player;
pub mod tree;

pub use evaluate::evaluate;
pub use intervals::{Interval, IntervalNode, compile};
pub use keyframe::Keyframe;
pub use mixer::{TimelineKey, TimelineMixer};
pub use player::{ChangeCallback, CompleteCallback, Playback, PlaybackState, Timeline};
pub use tree::{TrackNode, ValueNode};
