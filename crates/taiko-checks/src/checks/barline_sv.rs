//! Slider-velocity lines placed just after the barline they were meant to
//! affect. The barline keeps the old velocity, which is rarely intended.

use anyhow::Result;
use taiko_model::{Beatmap, Issue, IssueArg, Severity, TierSet};

use crate::config::AnalysisConfig;
use crate::registry::{Category, Check, CheckFn};
use crate::timing::offset_from_nearest_barline_ms;

pub const CHECK: Check = Check {
    name: "barline_unaffected_by_sv",
    category: Category::Timing,
    tiers: TierSet::ALL,
    func: CheckFn::Beatmap(run),
};

fn run(beatmap: &Beatmap, _cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for sv_change in beatmap.sv_changes() {
        let Some(point) = beatmap.uninherited_point_at(sv_change.offset) else {
            continue;
        };
        let unsnap = offset_from_nearest_barline_ms(beatmap, sv_change.offset, point)?;

        // A positive sub-millisecond offset means the barline sits just
        // before the line and escapes its velocity.
        if unsnap > 0.0 && unsnap <= 1.0 {
            issues.push(
                Issue::new("warning", Severity::Warning)
                    .at(sv_change.offset - unsnap)
                    .for_tiers(TierSet::ALL)
                    .arg(IssueArg::Number(unsnap)),
            );
        }
    }

    Ok(issues)
}
