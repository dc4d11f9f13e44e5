// osu!taiko beatmap data model: timing points, hit objects, difficulty tiers, issue records

mod beatmap;
mod difficulty;
mod hit_object;
mod issue;
mod timing_point;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use beatmap::{Background, Beatmap, BeatmapSet};
pub use difficulty::{PerTier, Tier, TierSet};
pub use hit_object::{HitObject, HitObjectKind, HitSounds};
pub use issue::{Issue, IssueArg, Severity, Span};
pub use timing_point::TimingPoint;
