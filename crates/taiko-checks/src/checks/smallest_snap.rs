//! Gaps between circles tighter than the tier's smallest rankable snap.

use anyhow::Result;
use taiko_model::{Beatmap, HitObject, Issue, PerTier, Severity, Tier};

use crate::checks::LOWER_FOUR;
use crate::config::AnalysisConfig;
use crate::engine::RunGrouper;
use crate::registry::{Category, Check, CheckFn};
use crate::timing::normalized_beat_at;

pub const CHECK: Check = Check {
    name: "smallest_snap",
    category: Category::Compose,
    tiers: LOWER_FOUR,
    func: CheckFn::Beatmap(run),
};

fn beat_divisor(tier: Tier) -> Option<f64> {
    match tier {
        Tier::Kantan => Some(2.0),
        Tier::Futsuu => Some(3.0),
        Tier::Muzukashii => Some(6.0),
        Tier::Oni => Some(8.0),
        Tier::Inner | Tier::Ura => None,
    }
}

fn run(beatmap: &Beatmap, cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    let circles: Vec<&HitObject> =
        beatmap.hit_objects.iter().filter(|o| o.is_circle()).collect();

    let mut groups: PerTier<RunGrouper> = PerTier::default();
    let mut issues = Vec::new();

    for i in 0..circles.len() {
        let beat = normalized_beat_at(beatmap, circles[i].time, cfg)?;
        let gap = match circles.get(i + 1) {
            Some(next) => next.time - circles[i].time,
            None => f64::INFINITY,
        };

        for tier in Tier::ALL {
            let Some(divisor) = beat_divisor(tier) else { continue };
            let minimal = beat / divisor;

            if gap + cfg.ms_epsilon < minimal {
                groups[tier].push(circles[i], circles[i + 1]);
            } else if let Some((first, last)) = groups[tier].flush() {
                issues.push(
                    Issue::new("problem", Severity::Problem)
                        .between(first, last)
                        .for_tier(tier),
                );
            }
        }
    }

    Ok(issues)
}
