use serde::{Deserialize, Serialize};

use crate::difficulty::Tier;
use crate::hit_object::HitObject;
use crate::timing_point::TimingPoint;

/// A background image reference with its editor offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Background {
    pub path: String,
    /// Editor x/y offset in osu!pixels.
    pub offset: (i32, i32),
}

/// Read-only view of one difficulty's parsed data.
///
/// Sequences are time-sorted by the parser; the analysis core borrows this
/// view for one pass and owns no state beyond it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beatmap {
    /// Difficulty name, e.g. "Muzukashii".
    pub version: String,
    /// The tier this difficulty is declared as.
    pub tier: Tier,
    /// Ascending by offset; concurrent points keep parse order.
    pub timing_points: Vec<TimingPoint>,
    /// Ascending by start time.
    pub hit_objects: Vec<HitObject>,
    pub hp_drain: f64,
    pub overall_difficulty: f64,
    /// Playable duration minus breaks, in milliseconds.
    pub drain_time_ms: f64,
    pub backgrounds: Vec<Background>,
}

impl Beatmap {
    /// The timing point in effect at `time`: the last point with
    /// `offset <= time`, or the first point when `time` precedes them all.
    /// Concurrent points resolve to the later-listed one.
    pub fn timing_point_at(&self, time: f64) -> Option<&TimingPoint> {
        self.timing_points
            .iter()
            .rev()
            .find(|p| p.offset <= time)
            .or_else(|| self.timing_points.first())
    }

    /// The tempo-defining (uninherited) point in effect at `time`.
    pub fn uninherited_point_at(&self, time: f64) -> Option<&TimingPoint> {
        self.timing_points
            .iter()
            .rev()
            .find(|p| p.uninherited && p.offset <= time)
            .or_else(|| self.timing_points.iter().find(|p| p.uninherited))
    }

    pub fn uninherited_points(&self) -> impl Iterator<Item = &TimingPoint> {
        self.timing_points.iter().filter(|p| p.uninherited)
    }

    /// Slider-velocity changes (inherited / green lines).
    pub fn sv_changes(&self) -> impl Iterator<Item = &TimingPoint> {
        self.timing_points.iter().filter(|p| !p.uninherited)
    }

    /// Timing points at which the kiai flag toggles, in time order.
    /// A leading point with kiai already set counts as the first toggle.
    pub fn kiai_toggles(&self) -> Vec<&TimingPoint> {
        let mut toggles = Vec::new();
        let mut previous: Option<&TimingPoint> = None;
        for point in &self.timing_points {
            match previous {
                None if point.kiai => toggles.push(point),
                Some(prev) if prev.kiai != point.kiai => toggles.push(point),
                _ => {}
            }
            previous = Some(point);
        }
        toggles
    }
}

/// All difficulties of one mapset, used by set-level consistency checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapSet {
    pub beatmaps: Vec<Beatmap>,
}

impl BeatmapSet {
    /// Whether the easiest difficulty in the set is a Kantan.
    pub fn is_bottom_tier_kantan(&self) -> bool {
        self.beatmaps.iter().map(|b| b.tier).min() == Some(Tier::Kantan)
    }
}
