//! Tempo normalization and barline offset queries.
//!
//! Absolute beat length is not comparable across songs of different base
//! tempo, so every threshold expressed "in beats" works on the normalized
//! value instead: the raw beat duration folded into a canonical BPM band.

use anyhow::{Context, Result, ensure};
use taiko_model::{Beatmap, TimingPoint};

use crate::config::AnalysisConfig;
use crate::nav::take_lower_abs;

/// Fold a raw beat duration into the canonical comparison band.
///
/// Doubles while at or below the fast edge, halves while at or above the
/// slow edge, then divides by 1.5 while still at or above the fold edge.
/// Idempotent: a value already inside the band comes back unchanged.
pub fn normalized_ms_per_beat(ms_per_beat: f64, cfg: &AnalysisConfig) -> Result<f64> {
    ensure!(
        ms_per_beat > 0.0 && ms_per_beat.is_finite(),
        "cannot normalize non-positive beat duration ({ms_per_beat}ms)"
    );

    let fast_edge = 60_000.0 / cfg.normalize_max_bpm;
    let slow_edge = 60_000.0 / cfg.normalize_min_bpm;
    let fold_edge = 60_000.0 / cfg.normalize_fold_bpm;

    let mut result = ms_per_beat;
    while result <= fast_edge {
        result *= 2.0;
    }
    while result >= slow_edge {
        result /= 2.0;
    }
    while result >= fold_edge {
        result /= 1.5;
    }
    Ok(result)
}

/// Normalized beat duration of the tempo point governing `time`.
///
/// Errors when the beatmap has no uninherited timing point at all; callers
/// that want "no issues" semantics for empty timing data should check for
/// that before iterating objects.
pub fn normalized_beat_at(beatmap: &Beatmap, time: f64, cfg: &AnalysisConfig) -> Result<f64> {
    let point = beatmap
        .uninherited_point_at(time)
        .context("beatmap has no uninherited timing point")?;
    normalized_ms_per_beat(point.ms_per_beat, cfg)
}

/// Offset of `time` past the previous implicit barline, in `[0, bar_gap)`.
pub fn offset_from_prev_barline_ms(time: f64, point: &TimingPoint) -> Result<f64> {
    let bar_gap = point.bar_gap_ms()?;
    Ok((time - point.offset).rem_euclid(bar_gap))
}

/// Signed distance to the next barline (zero or negative).
///
/// The naive candidate assumes the current tempo holds until the next
/// barline, but a new tempo point may take over before then, moving where
/// the barline actually falls. The governing point at the candidate instant
/// is re-queried and whichever candidate is nearer wins.
pub fn offset_from_next_barline_ms(
    beatmap: &Beatmap,
    time: f64,
    point: &TimingPoint,
) -> Result<f64> {
    let bar_gap = point.bar_gap_ms()?;
    let naive = (time - point.offset).rem_euclid(bar_gap) - bar_gap;
    let governing = beatmap.uninherited_point_at(time + naive).unwrap_or(point);
    let against_point = time - governing.offset;
    Ok(take_lower_abs(naive, against_point))
}

/// Signed offset of least magnitude between the previous and next barline.
pub fn offset_from_nearest_barline_ms(
    beatmap: &Beatmap,
    time: f64,
    point: &TimingPoint,
) -> Result<f64> {
    let prev = offset_from_prev_barline_ms(time, point)?;
    let next = offset_from_next_barline_ms(beatmap, time, point)?;
    Ok(take_lower_abs(prev, next))
}
