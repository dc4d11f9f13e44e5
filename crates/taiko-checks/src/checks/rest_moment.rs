//! Chains running too long without a required rest moment.

use anyhow::Result;
use taiko_model::{Beatmap, Issue, IssueArg, PerTier, Severity, Tier};

use crate::checks::LOWER_FOUR;
use crate::config::AnalysisConfig;
use crate::engine::{RestRule, continuous_sections};
use crate::registry::{Category, Check, CheckFn};
use crate::timing::normalized_beat_at;

pub const CHECK: Check = Check {
    name: "rest_moment",
    category: Category::Compose,
    tiers: LOWER_FOUR,
    func: CheckFn::Beatmap(run),
};

struct TierRules {
    rules: &'static [RestRule],
    /// "3/1"-style description of the required break.
    label: &'static str,
    minor_over: f64,
    /// Inclusive for the upper tiers, exclusive for Kantan/Futsuu.
    warning_at: f64,
    warning_inclusive: bool,
}

fn rules_for(tier: Tier) -> Option<TierRules> {
    match tier {
        Tier::Kantan => Some(TierRules {
            rules: &const { [RestRule::single(3.0)] },
            label: "3/1",
            minor_over: 36.0,
            warning_at: 44.0,
            warning_inclusive: false,
        }),
        Tier::Futsuu => Some(TierRules {
            rules: &const { [RestRule::single(2.0)] },
            label: "2/1",
            minor_over: 36.0,
            warning_at: 44.0,
            warning_inclusive: false,
        }),
        Tier::Muzukashii => Some(TierRules {
            rules: &const { [RestRule::single(1.5)] },
            label: "3/2",
            minor_over: 20.0,
            warning_at: 32.0,
            warning_inclusive: true,
        }),
        Tier::Oni => Some(TierRules {
            rules: &const { [RestRule::single(1.0)] },
            label: "1/1",
            minor_over: 20.0,
            warning_at: 32.0,
            warning_inclusive: true,
        }),
        Tier::Inner | Tier::Ura => None,
    }
}

fn run(beatmap: &Beatmap, cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    let tier_rules = PerTier::from_fn(rules_for);
    let mut issues = Vec::new();

    for (tier, rules) in tier_rules.iter() {
        let Some(tier_rules) = rules else { continue };
        let sections = continuous_sections(
            &beatmap.hit_objects,
            tier_rules.rules,
            |time| normalized_beat_at(beatmap, time, cfg),
            cfg.ms_epsilon,
        )?;

        for section in sections {
            let exceeds_warning = if tier_rules.warning_inclusive {
                section.beats >= tier_rules.warning_at
            } else {
                section.beats > tier_rules.warning_at
            };
            let severity = if exceeds_warning {
                Severity::Warning
            } else if section.beats > tier_rules.minor_over {
                Severity::Minor
            } else {
                continue;
            };

            issues.push(
                Issue::new(
                    if severity == Severity::Warning { "warning" } else { "minor" },
                    severity,
                )
                .between(section.start, section.end)
                .for_tier(tier)
                .arg(IssueArg::text(tier_rules.label))
                .arg(IssueArg::Int(section.beats as i64)),
            );
        }
    }

    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taiko_model::Span;
    use taiko_model::test_support::BeatmapBuilder;

    fn cfg() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    #[test]
    fn empty_beatmap_is_clean() {
        let beatmap = BeatmapBuilder::new(Tier::Oni).red_line(0.0, 400.0, 4).build();
        assert!(run(&beatmap, &cfg()).unwrap().is_empty());
    }

    // 150 BPM (400ms/beat) survives normalization unchanged, so beat math
    // in these fixtures is exact.

    #[test]
    fn thirty_three_beats_of_one_beat_gaps_warns_muzukashii_only() {
        let beatmap = BeatmapBuilder::new(Tier::Muzukashii)
            .red_line(0.0, 400.0, 4)
            .circles(1000.0, 400.0, 34)
            .build();

        let issues = run(&beatmap, &cfg()).unwrap();
        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.severity, Severity::Warning);
        assert!(issue.tiers.contains(Tier::Muzukashii));
        assert!(!issue.tiers.contains(Tier::Oni));
        assert_eq!(
            issue.args,
            vec![IssueArg::text("3/2"), IssueArg::Int(33)]
        );
        assert_eq!(issue.span, Some(Span::Between(1000.0, 1000.0 + 33.0 * 400.0)));
    }

    #[test]
    fn rests_reset_the_count() {
        // Every gap is 2 beats, a rest for Oni: sections never accumulate.
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, 400.0, 4)
            .circles(0.0, 800.0, 12) // 2-beat gaps: rests everywhere for Oni
            .build();
        let issues = run(&beatmap, &cfg()).unwrap();
        assert!(issues.iter().all(|i| !i.tiers.contains(Tier::Oni)));
    }

    #[test]
    fn kantan_warning_threshold_is_exclusive() {
        // 44 one-beat gaps: at the limit, Minor only for Kantan.
        let beatmap = BeatmapBuilder::new(Tier::Kantan)
            .red_line(0.0, 400.0, 4)
            .circles(0.0, 400.0, 45)
            .build();
        let issues = run(&beatmap, &cfg()).unwrap();
        let kantan: Vec<_> = issues
            .iter()
            .filter(|i| i.tiers.contains(Tier::Kantan))
            .collect();
        assert_eq!(kantan.len(), 1);
        assert_eq!(kantan[0].severity, Severity::Minor);

        // One more beat crosses it.
        let beatmap = BeatmapBuilder::new(Tier::Kantan)
            .red_line(0.0, 400.0, 4)
            .circles(0.0, 400.0, 46)
            .build();
        let issues = run(&beatmap, &cfg()).unwrap();
        let kantan: Vec<_> = issues
            .iter()
            .filter(|i| i.tiers.contains(Tier::Kantan))
            .collect();
        assert_eq!(kantan[0].severity, Severity::Warning);
    }

    #[test]
    fn missing_red_line_with_objects_errors() {
        let beatmap = BeatmapBuilder::new(Tier::Oni).circle(0.0).circle(400.0).build();
        assert!(run(&beatmap, &cfg()).is_err());
    }
}
