//! HP and OD settings straying from the ranking-criteria recommendations.

use anyhow::Result;
use taiko_model::{Beatmap, Issue, IssueArg, Severity, Tier};

use crate::checks::LOWER_FOUR;
use crate::config::AnalysisConfig;
use crate::registry::{Category, Check, CheckFn};

pub const CHECK: Check = Check {
    name: "hp_od",
    category: Category::Settings,
    tiers: LOWER_FOUR,
    func: CheckFn::Beatmap(run),
};

fn recommended_od(tier: Tier) -> Option<f64> {
    match tier {
        Tier::Kantan => Some(3.0),
        Tier::Futsuu => Some(4.0),
        Tier::Muzukashii => Some(5.0),
        Tier::Oni => Some(5.5),
        Tier::Inner | Tier::Ura => None,
    }
}

fn recommended_hp(tier: Tier) -> Option<f64> {
    match tier {
        Tier::Kantan => Some(8.0),
        Tier::Futsuu => Some(7.0),
        Tier::Muzukashii => Some(6.0),
        Tier::Oni => Some(5.5),
        Tier::Inner | Tier::Ura => None,
    }
}

/// Shift the recommended HP for unusually short or long drain, rounding up
/// to avoid fractional recommendations.
fn adjust_hp_for_drain(hp: f64, drain_ms: f64) -> f64 {
    if drain_ms <= 60_000.0 {
        (hp + 1.0).ceil()
    } else if drain_ms >= 285_000.0 {
        (hp - 2.0).ceil()
    } else if drain_ms >= 225_000.0 {
        (hp - 1.0).ceil()
    } else {
        hp
    }
}

/// Settings are compared at two decimals, ties to even, matching how the
/// editor displays them.
fn round_setting(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn run(beatmap: &Beatmap, _cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    let hp = round_setting(beatmap.hp_drain);
    let od = round_setting(beatmap.overall_difficulty);
    let mut issues = Vec::new();

    for tier in Tier::ALL {
        let (Some(rec_od), Some(rec_hp)) = (recommended_od(tier), recommended_hp(tier)) else {
            continue;
        };
        let rec_hp = adjust_hp_for_drain(rec_hp, beatmap.drain_time_ms);

        let hp_deviation = (hp - rec_hp).abs();
        if hp_deviation > 1.0 {
            issues.push(
                Issue::new("hp_warning", Severity::Warning)
                    .for_tier(tier)
                    .arg(IssueArg::Number(rec_hp))
                    .arg(IssueArg::Number(hp)),
            );
        } else if hp_deviation > 0.0 {
            issues.push(
                Issue::new("hp_minor", Severity::Minor)
                    .for_tier(tier)
                    .arg(IssueArg::Number(rec_hp))
                    .arg(IssueArg::Number(hp)),
            );
        }

        let od_deviation = (od - rec_od).abs();
        if od_deviation > 0.5 {
            issues.push(
                Issue::new("od_warning", Severity::Warning)
                    .for_tier(tier)
                    .arg(IssueArg::Number(rec_od))
                    .arg(IssueArg::Number(od)),
            );
        } else if od_deviation > 0.0 {
            issues.push(
                Issue::new("od_minor", Severity::Minor)
                    .for_tier(tier)
                    .arg(IssueArg::Number(rec_od))
                    .arg(IssueArg::Number(od)),
            );
        }
    }

    Ok(issues)
}
