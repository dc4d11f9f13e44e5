//! The same background file placed at different offsets across difficulties.

use anyhow::Result;
use taiko_model::{BeatmapSet, Issue, IssueArg, Severity, TierSet};

use crate::config::AnalysisConfig;
use crate::registry::{Category, Check, CheckFn};

pub const CHECK: Check = Check {
    name: "bg_offset_consistency",
    category: Category::Design,
    tiers: TierSet::ALL,
    func: CheckFn::Mapset(run),
};

fn run(set: &BeatmapSet, _cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    // Path -> distinct offsets, both in first-appearance order so the
    // report is stable across runs.
    let mut offsets_by_path: Vec<(&str, Vec<(i32, i32)>)> = Vec::new();

    for beatmap in &set.beatmaps {
        for background in &beatmap.backgrounds {
            let index = match offsets_by_path
                .iter()
                .position(|(path, _)| *path == background.path)
            {
                Some(index) => index,
                None => {
                    offsets_by_path.push((background.path.as_str(), Vec::new()));
                    offsets_by_path.len() - 1
                }
            };
            let offsets = &mut offsets_by_path[index].1;
            if !offsets.contains(&background.offset) {
                offsets.push(background.offset);
            }
        }
    }

    Ok(offsets_by_path
        .into_iter()
        .filter(|(_, offsets)| offsets.len() > 1)
        .map(|(path, offsets)| {
            let enumerated = offsets
                .iter()
                .map(|(x, y)| format!("({x}, {y})"))
                .collect::<Vec<_>>()
                .join(", ");
            Issue::new("minor", Severity::Minor)
                .for_tiers(TierSet::ALL)
                .arg(IssueArg::text(path))
                .arg(IssueArg::Int(offsets.len() as i64))
                .arg(IssueArg::Text(enumerated))
        })
        .collect())
}
