#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::float_cmp)]

pub mod easing;
pub mod errors;
pub mod timeline;
pub mod utils;

pub use easing::{CubicBezier, Easing};
pub use errors::{Result, TimelineError};
pub use timeline::{
    Interval, Keyframe, Playback, PlaybackState, Timeline, TimelineKey, TimelineMixer, TrackNode,
    ValueNode,
};
pub use utils::time::{Clock, ManualClock, SystemClock};
