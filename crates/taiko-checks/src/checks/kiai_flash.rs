//! Kiai toggled on and off again fast enough to flash the playfield.

use anyhow::Result;
use taiko_model::{Beatmap, Issue, Severity, TierSet};

use crate::config::AnalysisConfig;
use crate::registry::{Category, Check, CheckFn};
use crate::timing::normalized_beat_at;

pub const CHECK: Check = Check {
    name: "kiai_flash",
    category: Category::Timing,
    tiers: TierSet::ALL,
    func: CheckFn::Beatmap(run),
};

fn run(beatmap: &Beatmap, cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    let toggles = beatmap.kiai_toggles();
    let mut issues = Vec::new();

    for pair in toggles.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let beat = normalized_beat_at(beatmap, current.offset, cfg)?;
        let gap = next.offset - current.offset;

        if gap <= (beat / 2.5).ceil() {
            issues.push(
                Issue::new("warning", Severity::Warning)
                    .at(current.offset)
                    .for_tiers(TierSet::ALL),
            );
        } else if gap <= (beat / 2.0).ceil() {
            issues.push(
                Issue::new("minor", Severity::Minor)
                    .at(current.offset)
                    .for_tiers(TierSet::ALL),
            );
        }
    }

    Ok(issues)
}
