//! First object placed so early that the client may stutter loading in.

use anyhow::Result;
use taiko_model::{Beatmap, Issue, IssueArg, Severity, TierSet};

use crate::config::AnalysisConfig;
use crate::registry::{Category, Check, CheckFn};

const LIMIT_MS: i64 = 150;
const RECOMMENDED_MS: i64 = 200;

pub const CHECK: Check = Check {
    name: "first_note_stuttering",
    category: Category::Timing,
    tiers: TierSet::ALL,
    func: CheckFn::Beatmap(run),
};

fn run(beatmap: &Beatmap, _cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    let Some(first) = beatmap.hit_objects.first() else {
        return Ok(Vec::new());
    };

    let severity = if first.time < LIMIT_MS as f64 {
        Severity::Warning
    } else if first.time < RECOMMENDED_MS as f64 {
        Severity::Minor
    } else {
        return Ok(Vec::new());
    };

    Ok(vec![
        Issue::new(
            if severity == Severity::Warning { "warning" } else { "minor" },
            severity,
        )
        .at(first.time)
        .for_tiers(TierSet::ALL)
        .arg(IssueArg::Int(LIMIT_MS))
        .arg(IssueArg::Int(RECOMMENDED_MS)),
    ])
}
