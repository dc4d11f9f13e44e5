//! Neighbor and gap queries over time-sorted object sequences.
//!
//! Sequence boundaries are never errors: a missing neighbor becomes `None`,
//! and gap helpers substitute sentinels (`+inf` forward, `0` backward) so
//! downstream threshold comparisons behave at the first and last object.

use taiko_model::HitObject;

/// Whichever of the two values is smaller in magnitude, keeping its sign.
pub fn take_lower_abs(first: f64, second: f64) -> f64 {
    if first.abs() < second.abs() { first } else { second }
}

/// Gap between two objects, measured from the earlier object's tail so that
/// sliders and spinners count from where they end.
pub fn gap_ms(earlier: &HitObject, later: &HitObject) -> f64 {
    later.time - earlier.end_time
}

/// Gap from `objects[i]` to its successor, `+inf` at the end of the sequence.
pub fn forward_gap_ms(objects: &[HitObject], i: usize) -> f64 {
    match objects.get(i + 1) {
        Some(next) => gap_ms(&objects[i], next),
        None => f64::INFINITY,
    }
}

/// Nearest following object satisfying `pred`. With `skip_concurrent`,
/// objects sharing the anchor's exact start time are passed over.
pub fn next_matching<'a>(
    objects: &'a [HitObject],
    i: usize,
    skip_concurrent: bool,
    pred: impl Fn(&HitObject) -> bool,
) -> Option<&'a HitObject> {
    let anchor_time = objects.get(i)?.time;
    objects[i + 1..]
        .iter()
        .filter(|o| !skip_concurrent || o.time != anchor_time)
        .find(|o| pred(o))
}

/// Nearest preceding object satisfying `pred`. With `skip_concurrent`,
/// objects sharing the anchor's exact start time are passed over.
pub fn prev_matching<'a>(
    objects: &'a [HitObject],
    i: usize,
    skip_concurrent: bool,
    pred: impl Fn(&HitObject) -> bool,
) -> Option<&'a HitObject> {
    let anchor_time = objects.get(i)?.time;
    objects[..i]
        .iter()
        .rev()
        .filter(|o| !skip_concurrent || o.time != anchor_time)
        .find(|o| pred(o))
}

/// The immediate next object, skipping concurrent ones when asked.
pub fn next_object(objects: &[HitObject], i: usize, skip_concurrent: bool) -> Option<&HitObject> {
    next_matching(objects, i, skip_concurrent, |_| true)
}

/// The immediate previous object, skipping concurrent ones when asked.
pub fn prev_object(objects: &[HitObject], i: usize, skip_concurrent: bool) -> Option<&HitObject> {
    prev_matching(objects, i, skip_concurrent, |_| true)
}
