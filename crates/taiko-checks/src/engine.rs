//! Reusable evaluation strategies shared by the analyzers.
//!
//! Two strategies cover most per-tier rules: a boundary scan that segments
//! the object sequence into continuously mapped stretches separated by
//! qualifying rests, and a run grouper that folds consecutive violating
//! object pairs into one reported span.

use anyhow::Result;
use taiko_model::HitObject;

/// One way a rest can qualify: `gap_count` consecutive gaps, each at least
/// `min_beats` normalized beats long. A tier may accept several alternatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestRule {
    pub gap_count: usize,
    pub min_beats: f64,
}

impl RestRule {
    pub const fn single(min_beats: f64) -> Self {
        Self { gap_count: 1, min_beats }
    }
}

/// A continuously mapped stretch, measured in whole normalized beats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub start: f64,
    pub end: f64,
    pub beats: f64,
}

/// Gaps are taken head-to-head; tails do not shorten a rest here.
fn start_gap(objects: &[HitObject], i: usize) -> f64 {
    objects[i + 1].time - objects[i].time
}

/// Does any rule accept the `gap_count` gaps ending just before `boundary`?
/// `boundary` is a gap index one past the window, so a backward window for
/// object `i` passes `i` and a forward window passes `i + rule.gap_count`.
fn window_qualifies(
    objects: &[HitObject],
    window_end: usize,
    rules: &[RestRule],
    beat: f64,
    ms_epsilon: f64,
) -> bool {
    rules.iter().any(|rule| {
        if window_end < rule.gap_count || window_end > objects.len().saturating_sub(1) {
            return false;
        }
        (window_end - rule.gap_count..window_end)
            .all(|g| start_gap(objects, g) + ms_epsilon >= rule.min_beats * beat)
    })
}

/// Segment `objects` into continuous sections separated by qualifying rests.
///
/// The first object always opens a section; an object whose backward gap
/// window qualifies re-opens one; an object whose forward window qualifies
/// (or the last object) closes the open section. Section length is
/// `floor((end - start + epsilon) / beat)` with the beat in force at the
/// closing object.
pub fn continuous_sections(
    objects: &[HitObject],
    rules: &[RestRule],
    mut beat_at: impl FnMut(f64) -> Result<f64>,
    ms_epsilon: f64,
) -> Result<Vec<Section>> {
    let mut sections = Vec::new();
    let mut open: Option<f64> = None;

    for i in 0..objects.len() {
        let beat = beat_at(objects[i].time)?;

        if open.is_none()
            && (i == 0 || window_qualifies(objects, i, rules, beat, ms_epsilon))
        {
            open = Some(objects[i].time);
        }

        let closes = i == objects.len() - 1
            || rules.iter().any(|rule| {
                window_qualifies(objects, i + rule.gap_count, &[*rule], beat, ms_epsilon)
            });
        if closes
            && let Some(start) = open.take()
        {
            let end = objects[i].time;
            sections.push(Section {
                start,
                end,
                beats: ((end - start + ms_epsilon) / beat).floor(),
            });
        }
    }

    Ok(sections)
}

/// Accumulates consecutive violating object pairs into one span.
///
/// Each difficulty tier keeps its own grouper since thresholds differ;
/// callers flush on the first non-violating gap and once more at the end of
/// the sequence.
#[derive(Debug, Default)]
pub struct RunGrouper {
    times: Vec<f64>,
}

impl RunGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violating pair. The leading object is only recorded when it
    /// starts a fresh run.
    pub fn push(&mut self, current: &HitObject, next: &HitObject) {
        if self.times.is_empty() {
            self.times.push(current.time);
        }
        self.times.push(next.time);
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Close the run, returning its first and last timestamp.
    pub fn flush(&mut self) -> Option<(f64, f64)> {
        let first = self.times.first().copied()?;
        let last = self.times.last().copied()?;
        self.times.clear();
        Some((first, last))
    }
}
