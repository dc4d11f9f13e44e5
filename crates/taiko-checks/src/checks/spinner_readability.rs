//! Spinners starting too close behind the previous object to read.

use anyhow::Result;
use taiko_model::{Beatmap, Issue, Severity, Tier, TierSet};

use crate::config::AnalysisConfig;
use crate::nav::gap_ms;
use crate::registry::{Category, Check, CheckFn};
use crate::timing::normalized_beat_at;

pub const CHECK: Check = Check {
    name: "spinner_readability",
    category: Category::Compose,
    tiers: TierSet::ALL,
    func: CheckFn::Beatmap(run),
};

fn beat_divisor(tier: Tier) -> f64 {
    // The visual overlap matters most where players read slowest.
    match tier {
        Tier::Kantan | Tier::Futsuu | Tier::Muzukashii => 2.0,
        Tier::Oni | Tier::Inner | Tier::Ura => 4.0,
    }
}

fn run(beatmap: &Beatmap, cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    let objects = &beatmap.hit_objects;
    let mut issues = Vec::new();

    for i in 0..objects.len() {
        let Some(next) = objects.get(i + 1) else { break };
        if !next.is_spinner() {
            continue;
        }

        let beat = normalized_beat_at(beatmap, objects[i].time, cfg)?;
        let gap = gap_ms(&objects[i], next);

        for tier in Tier::ALL {
            if gap + cfg.ms_epsilon < beat / beat_divisor(tier) {
                issues.push(
                    Issue::new("minor", Severity::Minor)
                        .between(objects[i].time, next.time)
                        .for_tier(tier),
                );
            }
        }
    }

    Ok(issues)
}
