use crate::timeline::intervals::{Interval, IntervalNode};
use crate::timeline::tree::ValueNode;
use crate::utils::math::{inv_lerp, lerp};

/// Recomputes every leaf of `values` for the given timestamp.
///
/// Returns `true` only once every track has reached its terminal value.
/// Every leaf is visited on every call, so the mutated tree is always a
/// consistent snapshot for a single timestamp.
///
/// Both trees must come from the same [`compile`](super::compile) call;
/// their shapes are guaranteed to match by construction.
pub fn evaluate(timestamp: f32, intervals: &IntervalNode, values: &mut ValueNode) -> bool {
    match (intervals, values) {
        (IntervalNode::Leaf(intervals), ValueNode::Leaf(value)) => {
            evaluate_track(timestamp, intervals, value)
        }
        (IntervalNode::Branch(children), ValueNode::Branch(value_children)) => {
            let mut completed = true;
            for ((_, child), (_, value_child)) in children.iter().zip(value_children.iter_mut()) {
                // no short-circuit: every leaf must be rewritten
                completed &= evaluate(timestamp, child, value_child);
            }
            completed
        }
        _ => unreachable!("interval tree and value tree shapes diverge"),
    }
}

fn evaluate_track(timestamp: f32, intervals: &[Interval], value: &mut f32) -> bool {
    // Half-open match: a zero-duration interval [t, t) can never be hit, so
    // its target is picked up instantly via the successor's start_value (or
    // the terminal branch below).
    let interval = intervals
        .iter()
        .find(|interval| interval.start_at <= timestamp && timestamp < interval.end_at);

    let Some(interval) = interval else {
        // Past the last interval, or an empty track: hold the terminal value.
        if let Some(last) = intervals.last() {
            *value = last.end_value;
        }
        return true;
    };

    let progress = inv_lerp(interval.start_at, interval.end_at, timestamp);
    let eased = interval.easing.apply(progress);
    *value = lerp(interval.start_value, interval.end_value, eased);
    false
}
