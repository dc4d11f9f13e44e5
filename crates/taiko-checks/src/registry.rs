//! Explicit catalog of every analyzer, plus the drivers that run them.
//!
//! Checks register themselves here as plain `const` metadata; there is no
//! runtime discovery. A failing check is recorded and logged, never allowed
//! to abort the rest of the pass.

use anyhow::Result;
use taiko_model::{Beatmap, BeatmapSet, Issue, TierSet};

use crate::checks;
use crate::config::AnalysisConfig;

/// Reporting category a check files its issues under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Compose,
    Design,
    Settings,
    Timing,
}

/// A check body: some rules read one difficulty, others the whole set.
#[derive(Clone, Copy)]
pub enum CheckFn {
    Beatmap(fn(&Beatmap, &AnalysisConfig) -> Result<Vec<Issue>>),
    Mapset(fn(&BeatmapSet, &AnalysisConfig) -> Result<Vec<Issue>>),
}

/// Static metadata of one analyzer.
pub struct Check {
    pub name: &'static str,
    pub category: Category,
    /// Tiers the check has thresholds for.
    pub tiers: TierSet,
    pub func: CheckFn,
}

pub static CHECKS: &[Check] = &[
    checks::double_barline::CHECK,
    checks::rest_moment::CHECK,
    checks::pattern_length::CHECK,
    checks::smallest_snap::CHECK,
    checks::unrankable_finisher::CHECK,
    checks::spinner_readability::CHECK,
    checks::kiai_flash::CHECK,
    checks::conflicting_kiais::CHECK,
    checks::kiai_consistency::CHECK,
    checks::bg_offset_consistency::CHECK,
    checks::first_note_stuttering::CHECK,
    checks::last_note_hiding_barline::CHECK,
    checks::barline_sv::CHECK,
    checks::hp_od::CHECK,
];

/// Outcome of running one check against one beatmap (or the whole set).
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub check: &'static str,
    /// Difficulty name for per-beatmap checks, `None` for set-level ones.
    pub beatmap: Option<String>,
    pub issues: Vec<Issue>,
    /// Populated when the check failed on inconsistent input data.
    pub error: Option<String>,
}

fn run_beatmap_check(
    check: &Check,
    func: fn(&Beatmap, &AnalysisConfig) -> Result<Vec<Issue>>,
    beatmap: &Beatmap,
    cfg: &AnalysisConfig,
) -> CheckReport {
    match func(beatmap, cfg) {
        Ok(issues) => CheckReport {
            check: check.name,
            beatmap: Some(beatmap.version.clone()),
            issues,
            error: None,
        },
        Err(err) => {
            log::warn!("check {} failed on '{}': {err:#}", check.name, beatmap.version);
            CheckReport {
                check: check.name,
                beatmap: Some(beatmap.version.clone()),
                issues: Vec::new(),
                error: Some(format!("{err:#}")),
            }
        }
    }
}

/// Run every per-beatmap check against one difficulty.
pub fn analyze_beatmap(beatmap: &Beatmap, cfg: &AnalysisConfig) -> Vec<CheckReport> {
    CHECKS
        .iter()
        .filter_map(|check| match check.func {
            CheckFn::Beatmap(func) => Some(run_beatmap_check(check, func, beatmap, cfg)),
            CheckFn::Mapset(_) => None,
        })
        .collect()
}

/// Run the full check catalog against a mapset: per-beatmap checks on every
/// difficulty, set-level checks once.
pub fn analyze_mapset(set: &BeatmapSet, cfg: &AnalysisConfig) -> Vec<CheckReport> {
    let mut reports = Vec::new();
    for check in CHECKS {
        match check.func {
            CheckFn::Beatmap(func) => {
                for beatmap in &set.beatmaps {
                    reports.push(run_beatmap_check(check, func, beatmap, cfg));
                }
            }
            CheckFn::Mapset(func) => match func(set, cfg) {
                Ok(issues) => reports.push(CheckReport {
                    check: check.name,
                    beatmap: None,
                    issues,
                    error: None,
                }),
                Err(err) => {
                    log::warn!("check {} failed on mapset: {err:#}", check.name);
                    reports.push(CheckReport {
                        check: check.name,
                        beatmap: None,
                        issues: Vec::new(),
                        error: Some(format!("{err:#}")),
                    });
                }
            },
        }
    }
    reports
}
