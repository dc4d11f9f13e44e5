//! Concurrent timing points disagreeing about kiai at the same instant.
//!
//! The inherited line's flag wins in the client, but the override is fragile
//! and often unintended.

use anyhow::Result;
use taiko_model::{Beatmap, Issue, Severity, TierSet};

use crate::config::AnalysisConfig;
use crate::registry::{Category, Check, CheckFn};

pub const CHECK: Check = Check {
    name: "conflicting_kiais",
    category: Category::Timing,
    tiers: TierSet::ALL,
    func: CheckFn::Beatmap(run),
};

fn run(beatmap: &Beatmap, _cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    // Points are offset-sorted, so conflicting timestamps repeat adjacently
    // and ascending emission order falls out of the scan itself.
    let mut conflicts: Vec<f64> = Vec::new();

    for pair in beatmap.timing_points.windows(2) {
        if pair[0].offset == pair[1].offset
            && pair[0].kiai != pair[1].kiai
            && conflicts.last() != Some(&pair[0].offset)
        {
            conflicts.push(pair[0].offset);
        }
    }

    Ok(conflicts
        .into_iter()
        .map(|offset| {
            Issue::new("warning", Severity::Warning)
                .at(offset)
                .for_tiers(TierSet::ALL)
        })
        .collect())
}
