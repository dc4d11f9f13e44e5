//! Patterns of a given snap running past the recommended note count.
//!
//! Set-level because the Futsuu 1/2 limit depends on whether the set's
//! easiest difficulty is a Kantan.

use anyhow::Result;
use taiko_model::{Beatmap, BeatmapSet, HitObject, Issue, IssueArg, Severity, Span, Tier};

use crate::checks::LOWER_FOUR;
use crate::config::AnalysisConfig;
use crate::registry::{Category, Check, CheckFn};
use crate::timing::normalized_beat_at;

pub const CHECK: Check = Check {
    name: "pattern_length",
    category: Category::Compose,
    tiers: LOWER_FOUR,
    func: CheckFn::Mapset(run),
};

struct SnapLimit {
    /// Fraction of a normalized beat that counts as "this snap or tighter".
    beat_fraction: f64,
    label: &'static str,
    max_count: usize,
}

fn limits_for(tier: Tier, bottom_is_kantan: bool) -> &'static [SnapLimit] {
    const KANTAN: &[SnapLimit] = &[
        SnapLimit { beat_fraction: 1.0, label: "1/1", max_count: 7 },
        SnapLimit { beat_fraction: 1.0 / 2.0, label: "1/2", max_count: 2 },
    ];
    const FUTSUU: &[SnapLimit] = &[
        SnapLimit { beat_fraction: 1.0 / 2.0, label: "1/2", max_count: 7 },
        SnapLimit { beat_fraction: 1.0 / 3.0, label: "1/3", max_count: 2 },
    ];
    // Without a Kantan below it, Futsuu is the set's entry point and its
    // 1/2 chains are held shorter.
    const FUTSUU_BOTTOM: &[SnapLimit] = &[
        SnapLimit { beat_fraction: 1.0 / 2.0, label: "1/2", max_count: 5 },
        SnapLimit { beat_fraction: 1.0 / 3.0, label: "1/3", max_count: 2 },
    ];
    const MUZUKASHII: &[SnapLimit] = &[
        SnapLimit { beat_fraction: 1.0 / 4.0, label: "1/4", max_count: 5 },
        SnapLimit { beat_fraction: 1.0 / 6.0, label: "1/6", max_count: 4 },
    ];
    const ONI: &[SnapLimit] = &[
        SnapLimit { beat_fraction: 1.0 / 4.0, label: "1/4", max_count: 9 },
        SnapLimit { beat_fraction: 1.0 / 6.0, label: "1/6", max_count: 4 },
        SnapLimit { beat_fraction: 1.0 / 8.0, label: "1/8", max_count: 2 },
    ];

    match tier {
        Tier::Kantan => KANTAN,
        Tier::Futsuu if bottom_is_kantan => FUTSUU,
        Tier::Futsuu => FUTSUU_BOTTOM,
        Tier::Muzukashii => MUZUKASHII,
        Tier::Oni => ONI,
        Tier::Inner | Tier::Ura => &[],
    }
}

/// Scan one beatmap's circles for maximal runs at `limit`'s snap or tighter.
fn scan(
    beatmap: &Beatmap,
    circles: &[&HitObject],
    tier: Tier,
    limit: &SnapLimit,
    cfg: &AnalysisConfig,
    issues: &mut Vec<Issue>,
) -> Result<()> {
    let mut pattern_start: Option<(usize, f64)> = None;

    for i in 0..circles.len() {
        let beat = normalized_beat_at(beatmap, circles[i].time, cfg)?;
        let snap_ms = limit.beat_fraction * beat;

        let in_pattern_with_next = i + 1 < circles.len()
            && circles[i + 1].time - circles[i].end_time - cfg.ms_epsilon <= snap_ms;

        match pattern_start {
            None => {
                if in_pattern_with_next {
                    pattern_start = Some((i, circles[i].time));
                }
            }
            Some((start_index, start_time)) => {
                if !in_pattern_with_next {
                    pattern_start = None;
                    let count = i - start_index + 1;
                    let severity = if count > limit.max_count {
                        Severity::Warning
                    } else if count == limit.max_count {
                        Severity::Minor
                    } else {
                        continue;
                    };
                    issues.push(
                        Issue::new(
                            if severity == Severity::Warning { "warning" } else { "minor" },
                            severity,
                        )
                        .between(start_time, circles[i].time)
                        .for_tier(tier)
                        .arg(IssueArg::text(limit.label))
                        .arg(IssueArg::Int(count as i64)),
                    );
                }
            }
        }
    }

    Ok(())
}

fn run(set: &BeatmapSet, cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    let bottom_is_kantan = set.is_bottom_tier_kantan();
    let mut issues = Vec::new();

    for beatmap in &set.beatmaps {
        let circles: Vec<&HitObject> =
            beatmap.hit_objects.iter().filter(|o| o.is_circle()).collect();

        for tier in Tier::ALL {
            let before = issues.len();
            for limit in limits_for(tier, bottom_is_kantan) {
                scan(beatmap, &circles, tier, limit, cfg, &mut issues)?;
            }
            // Per-limit scans each walk the whole sequence; merge them back
            // into timestamp order for the tier.
            issues[before..].sort_by(|a, b| {
                let start = |i: &Issue| i.span.map(Span::start).unwrap_or_default();
                start(a).total_cmp(&start(b))
            });
        }
    }

    Ok(issues)
}
