//! Circle pattern roles.
//!
//! A "pattern" here is a local cluster of circles; an object's role in it is
//! decided purely from the gaps to its immediate neighbors (start times,
//! concurrent objects skipped) and recomputed per query. A neighbor that is
//! not a circle breaks the cluster the same way a missing neighbor does.

use taiko_model::HitObject;

use crate::nav::{next_object, prev_object};

fn neighbor_circle<'a>(
    objects: &'a [HitObject],
    i: usize,
    forward: bool,
) -> Option<&'a HitObject> {
    let neighbor = if forward {
        next_object(objects, i, true)
    } else {
        prev_object(objects, i, true)
    };
    neighbor.filter(|o| o.is_circle())
}

/// No circle immediately before, or the forward gap is strictly tighter
/// than the backward one. Ties resolve to "not the beginning".
pub fn is_at_beginning_of_pattern(objects: &[HitObject], i: usize) -> bool {
    let Some(previous) = neighbor_circle(objects, i, false) else {
        return true;
    };
    let Some(next) = neighbor_circle(objects, i, true) else {
        return false;
    };
    let gap_before = objects[i].time - previous.time;
    let gap_after = next.time - objects[i].time;
    gap_after < gap_before
}

/// No circle immediately after, or the backward gap is strictly tighter
/// than the forward one. Ties resolve to "not the end".
pub fn is_at_end_of_pattern(objects: &[HitObject], i: usize) -> bool {
    let Some(next) = neighbor_circle(objects, i, true) else {
        return true;
    };
    let Some(previous) = neighbor_circle(objects, i, false) else {
        return false;
    };
    let gap_before = objects[i].time - previous.time;
    let gap_after = next.time - objects[i].time;
    gap_before < gap_after
}

/// Both a beginning and an end, which only an isolated circle can be.
pub fn is_not_in_pattern(objects: &[HitObject], i: usize) -> bool {
    is_at_beginning_of_pattern(objects, i) && is_at_end_of_pattern(objects, i)
}

/// The pattern's defining spacing: the tightest neighbor gap relevant to
/// the object's role. Zero for an isolated circle.
pub fn pattern_spacing_ms(objects: &[HitObject], i: usize) -> f64 {
    let gap_before = match prev_object(objects, i, true) {
        Some(previous) => objects[i].time - previous.time,
        None => objects[i].time,
    };
    let gap_after = match next_object(objects, i, true) {
        Some(next) => next.time - objects[i].time,
        None => f64::INFINITY,
    };

    if is_not_in_pattern(objects, i) {
        0.0
    } else if is_at_beginning_of_pattern(objects, i) {
        gap_after
    } else if is_at_end_of_pattern(objects, i) {
        gap_before
    } else {
        gap_before.min(gap_after)
    }
}
