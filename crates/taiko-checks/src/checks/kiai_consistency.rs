//! Kiai section placement differing between difficulties of one set.
//!
//! Difficulties are grouped by their full kiai toggle sequence; one issue
//! per group keeps the report readable when only a single guest difficulty
//! deviates.

use anyhow::Result;
use taiko_model::{Beatmap, BeatmapSet, Issue, IssueArg, Severity, TierSet};

use crate::config::AnalysisConfig;
use crate::registry::{Category, Check, CheckFn};

pub const CHECK: Check = Check {
    name: "kiai_consistency",
    category: Category::Timing,
    tiers: TierSet::ALL,
    func: CheckFn::Mapset(run),
};

fn toggle_signature(beatmap: &Beatmap) -> Result<String> {
    let offsets: Vec<f64> = beatmap.kiai_toggles().iter().map(|p| p.offset).collect();
    Ok(serde_json::to_string(&offsets)?)
}

fn run(set: &BeatmapSet, _cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    // Signature -> member difficulty names, in first-appearance order.
    let mut groups: Vec<(String, Vec<&str>)> = Vec::new();

    for beatmap in &set.beatmaps {
        let signature = toggle_signature(beatmap)?;
        match groups.iter_mut().find(|(s, _)| *s == signature) {
            Some((_, members)) => members.push(&beatmap.version),
            None => groups.push((signature, vec![&beatmap.version])),
        }
    }

    if groups.len() <= 1 {
        return Ok(Vec::new());
    }

    Ok(groups
        .into_iter()
        .map(|(_, members)| {
            Issue::new("inconsistent_group", Severity::Minor)
                .for_tiers(TierSet::ALL)
                .arg(IssueArg::text(members.join(", ")))
        })
        .collect())
}
