use crate::easing::Easing;
use crate::errors::{Result, TimelineError};
use crate::timeline::keyframe::Keyframe;
use crate::timeline::tree::{TrackNode, ValueNode};

/// The compiled, timestamp-absolute form of a keyframe.
///
/// For a given track, intervals are contiguous and ordered: the first starts
/// at 0, and each `start_at` equals the previous interval's `end_at`. The
/// time range is half-open — `start_at` inclusive, `end_at` exclusive — so
/// every timestamp maps to at most one interval and a zero-duration keyframe
/// yields an interval no timestamp can land in.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    pub start_value: f32,
    pub end_value: f32,
    pub start_at: f32,
    pub end_at: f32,
    pub easing: Easing,
}

/// Compiled mirror of the value tree: every leaf holds that track's ordered
/// interval list. Built once per timeline, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum IntervalNode {
    Leaf(Vec<Interval>),
    Branch(Vec<(String, IntervalNode)>),
}

/// Compiles a definition tree against the initial value tree.
///
/// Both trees must have exactly the same shape; the first key-set or
/// leaf/branch disagreement aborts compilation with a path-qualified error.
/// Inputs are borrowed and never mutated.
pub fn compile(initial: &ValueNode, definition: &TrackNode) -> Result<IntervalNode> {
    compile_node(initial, definition, "")
}

fn compile_node(value: &ValueNode, definition: &TrackNode, path: &str) -> Result<IntervalNode> {
    match (value, definition) {
        (ValueNode::Leaf(initial), TrackNode::Leaf(keyframes)) => {
            Ok(IntervalNode::Leaf(compile_track(*initial, keyframes)))
        }
        (ValueNode::Branch(children), TrackNode::Branch(def_children)) => {
            // every definition key must name a value-tree child
            for (key, _) in def_children {
                if value.child(key).is_none() {
                    return Err(TimelineError::UnknownTrack {
                        path: join_path(path, key),
                    });
                }
            }

            let mut compiled = Vec::with_capacity(children.len());
            for (key, child) in children {
                let child_path = join_path(path, key);
                let Some(def_child) = definition.child(key) else {
                    return Err(TimelineError::MissingTrack { path: child_path });
                };
                compiled.push((key.clone(), compile_node(child, def_child, &child_path)?));
            }
            Ok(IntervalNode::Branch(compiled))
        }
        (value, definition) => Err(TimelineError::ShapeMismatch {
            path: display_path(path),
            value_kind: value.kind(),
            definition_kind: definition.kind(),
        }),
    }
}

/// Cumulative-sum pass over one track's keyframes. Each interval starts
/// where the previous ended (time and value alike).
fn compile_track(initial: f32, keyframes: &[Keyframe]) -> Vec<Interval> {
    let mut intervals = Vec::with_capacity(keyframes.len());
    let mut start_at = 0.0;
    let mut start_value = initial;

    for keyframe in keyframes {
        let end_at = start_at + keyframe.duration;
        intervals.push(Interval {
            start_value,
            end_value: keyframe.value,
            start_at,
            end_at,
            easing: keyframe.easing.clone(),
        });
        start_at = end_at;
        start_value = keyframe.value;
    }

    intervals
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}
