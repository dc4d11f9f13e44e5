//! Fluent builders for beatmap fixtures in tests.

use crate::beatmap::{Background, Beatmap, BeatmapSet};
use crate::difficulty::Tier;
use crate::hit_object::HitObject;
use crate::timing_point::TimingPoint;

/// Builder for a test beatmap. Objects and timing points may be added in any
/// order; `build` sorts both sequences by time while keeping insertion order
/// for concurrent entries.
#[derive(Debug, Clone)]
pub struct BeatmapBuilder {
    version: String,
    tier: Tier,
    timing_points: Vec<TimingPoint>,
    hit_objects: Vec<HitObject>,
    hp_drain: f64,
    overall_difficulty: f64,
    drain_time_ms: f64,
    backgrounds: Vec<Background>,
}

impl BeatmapBuilder {
    pub fn new(tier: Tier) -> Self {
        Self {
            version: tier.label().to_owned(),
            tier,
            timing_points: Vec::new(),
            hit_objects: Vec::new(),
            hp_drain: 5.0,
            overall_difficulty: 5.0,
            drain_time_ms: 120_000.0,
            backgrounds: Vec::new(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn timing_point(mut self, point: TimingPoint) -> Self {
        self.timing_points.push(point);
        self
    }

    /// Shorthand for an uninherited point.
    pub fn red_line(self, offset: f64, ms_per_beat: f64, meter: u32) -> Self {
        self.timing_point(TimingPoint::uninherited(offset, ms_per_beat, meter))
    }

    pub fn object(mut self, object: HitObject) -> Self {
        self.hit_objects.push(object);
        self
    }

    pub fn circle(self, time: f64) -> Self {
        self.object(HitObject::circle(time))
    }

    pub fn kat(self, time: f64) -> Self {
        self.object(HitObject::circle(time).kat())
    }

    pub fn slider(self, time: f64, end_time: f64) -> Self {
        self.object(HitObject::slider(time, end_time))
    }

    pub fn spinner(self, time: f64, end_time: f64) -> Self {
        self.object(HitObject::spinner(time, end_time))
    }

    /// Evenly spaced circles: `count` objects starting at `start`.
    pub fn circles(mut self, start: f64, spacing: f64, count: usize) -> Self {
        for i in 0..count {
            self.hit_objects
                .push(HitObject::circle(start + spacing * i as f64));
        }
        self
    }

    pub fn hp_drain(mut self, hp: f64) -> Self {
        self.hp_drain = hp;
        self
    }

    pub fn overall_difficulty(mut self, od: f64) -> Self {
        self.overall_difficulty = od;
        self
    }

    pub fn drain_time_ms(mut self, drain: f64) -> Self {
        self.drain_time_ms = drain;
        self
    }

    pub fn background(mut self, path: impl Into<String>, x: i32, y: i32) -> Self {
        self.backgrounds.push(Background {
            path: path.into(),
            offset: (x, y),
        });
        self
    }

    pub fn build(mut self) -> Beatmap {
        self.timing_points
            .sort_by(|a, b| a.offset.total_cmp(&b.offset));
        self.hit_objects.sort_by(|a, b| a.time.total_cmp(&b.time));
        Beatmap {
            version: self.version,
            tier: self.tier,
            timing_points: self.timing_points,
            hit_objects: self.hit_objects,
            hp_drain: self.hp_drain,
            overall_difficulty: self.overall_difficulty,
            drain_time_ms: self.drain_time_ms,
            backgrounds: self.backgrounds,
        }
    }
}

/// Build a mapset out of finished beatmaps.
pub fn mapset(beatmaps: Vec<Beatmap>) -> BeatmapSet {
    BeatmapSet { beatmaps }
}
