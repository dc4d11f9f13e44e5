//! Finishers too close to a neighboring circle, and finishers that repeat
//! their predecessor's color mid-pattern.

use anyhow::Result;
use taiko_model::{Beatmap, Issue, Severity, Tier, TierSet};

use crate::config::AnalysisConfig;
use crate::nav::{next_matching, prev_matching};
use crate::pattern::is_at_end_of_pattern;
use crate::registry::{Category, Check, CheckFn};
use crate::timing::normalized_beat_at;

pub const CHECK: Check = Check {
    name: "unrankable_finisher",
    category: Category::Compose,
    tiers: TierSet::ALL,
    func: CheckFn::Beatmap(run),
};

fn beat_divisor(tier: Tier) -> f64 {
    match tier {
        Tier::Kantan => 2.0,
        Tier::Futsuu | Tier::Muzukashii => 3.0,
        Tier::Oni | Tier::Inner | Tier::Ura => 4.0,
    }
}

fn run(beatmap: &Beatmap, cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    let objects = &beatmap.hit_objects;
    let mut issues = Vec::new();

    for (i, current) in objects.iter().enumerate() {
        if !current.is_circle() || !current.is_finisher() {
            continue;
        }

        let beat = normalized_beat_at(beatmap, current.time, cfg)?;
        let prev_circle = prev_matching(objects, i, false, |o| o.is_circle());
        let next_circle = next_matching(objects, i, false, |o| o.is_circle());

        let next_gap = match next_circle {
            Some(next) => next.time - current.time,
            None => f64::INFINITY,
        };
        // A finisher opening the map is judged as if a full beat preceded it.
        let prev_gap = match prev_circle {
            Some(prev) => current.time - prev.time,
            None => beat,
        };

        for tier in Tier::ALL {
            let minimal = beat / beat_divisor(tier);
            let next_violates = next_gap + cfg.ms_epsilon < minimal;
            let prev_violates = prev_gap + cfg.ms_epsilon < minimal;
            if !next_violates && !prev_violates {
                continue;
            }

            match tier {
                Tier::Kantan | Tier::Futsuu | Tier::Muzukashii => {
                    issues.push(
                        Issue::new("problem", Severity::Problem)
                            .at(current.time)
                            .for_tier(tier),
                    );
                }
                Tier::Oni if next_violates => {
                    issues.push(
                        Issue::new("problem", Severity::Problem)
                            .at(current.time)
                            .for_tier(tier),
                    );
                }
                Tier::Inner | Tier::Ura if next_violates => {
                    issues.push(
                        Issue::new("warning", Severity::Warning)
                            .at(current.time)
                            .for_tier(tier),
                    );
                }
                _ => {}
            }
        }

        // A finisher continuing its predecessor's color inside a pattern
        // plays as a mono chain ending on an accent, which reads poorly.
        if let Some(prev) = prev_circle
            && prev.is_don() == current.is_don()
            && !is_at_end_of_pattern(objects, i)
        {
            issues.push(
                Issue::new("mono_warning", Severity::Warning)
                    .at(current.time)
                    .for_tiers(TierSet::ALL),
            );
        }
    }

    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taiko_model::test_support::BeatmapBuilder;
    use taiko_model::{HitObject, Span};

    fn cfg() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    // 400ms/beat: minimal gaps are 200 (Kantan), 133.3 (Futsuu/Muzukashii),
    // 100 (Oni and up).

    #[test]
    fn finisher_too_close_to_next_note_is_unrankable_low_tiers() {
        let beatmap = BeatmapBuilder::new(Tier::Kantan)
            .red_line(0.0, 400.0, 4)
            .object(HitObject::circle(1000.0).finisher())
            .circle(1150.0)
            .build();

        let issues = run(&beatmap, &cfg()).unwrap();
        let kantan: Vec<_> = issues.iter().filter(|i| i.tiers.contains(Tier::Kantan)).collect();
        assert_eq!(kantan.len(), 1);
        assert_eq!(kantan[0].severity, Severity::Problem);
        assert_eq!(kantan[0].span, Some(Span::At(1000.0)));
        // 150ms clears the Oni floor of 100ms.
        assert!(!issues.iter().any(|i| i.tiers.contains(Tier::Oni)));
    }

    #[test]
    fn oni_ignores_a_tight_gap_before_the_finisher() {
        // 1/4 before the finisher, half a bar after: fine on Oni, a problem
        // on the lower tiers.
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, 400.0, 4)
            .circle(900.0)
            .object(HitObject::circle(1000.0).kat().finisher())
            .circle(1800.0)
            .build();

        let issues = run(&beatmap, &cfg()).unwrap();
        assert!(!issues.iter().any(|i| i.tiers.contains(Tier::Oni)));
        assert!(issues.iter().any(|i| {
            i.tiers.contains(Tier::Muzukashii) && i.severity == Severity::Problem
        }));
    }

    #[test]
    fn upper_tiers_warn_on_tight_gap_after_the_finisher() {
        let beatmap = BeatmapBuilder::new(Tier::Inner)
            .red_line(0.0, 400.0, 4)
            .object(HitObject::circle(1000.0).finisher())
            .kat(1050.0)
            .build();

        let issues = run(&beatmap, &cfg()).unwrap();
        let inner: Vec<_> = issues.iter().filter(|i| i.tiers.contains(Tier::Inner)).collect();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].severity, Severity::Warning);
        // Oni gets a problem for the same gap.
        assert!(issues.iter().any(|i| {
            i.tiers.contains(Tier::Oni) && i.severity == Severity::Problem
        }));
    }

    #[test]
    fn opening_finisher_assumes_a_full_beat_before_it() {
        let beatmap = BeatmapBuilder::new(Tier::Kantan)
            .red_line(0.0, 400.0, 4)
            .object(HitObject::circle(1000.0).finisher())
            .circle(2600.0)
            .build();
        assert!(run(&beatmap, &cfg()).unwrap().is_empty());
    }

    #[test]
    fn mono_color_finisher_mid_pattern_warns() {
        // Don, then a don finisher with a tighter gap following it: the
        // finisher is not the end of its pattern.
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, 400.0, 4)
            .circle(1000.0)
            .object(HitObject::circle(1400.0).finisher())
            .circle(1600.0)
            .circle(3000.0)
            .build();

        let issues = run(&beatmap, &cfg()).unwrap();
        assert!(issues.iter().any(|i| i.template == "mono_warning"));
    }

    #[test]
    fn mono_color_finisher_ending_its_pattern_is_fine() {
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, 400.0, 4)
            .circle(1000.0)
            .object(HitObject::circle(1400.0).finisher())
            .build();

        let issues = run(&beatmap, &cfg()).unwrap();
        assert!(!issues.iter().any(|i| i.template == "mono_warning"));
    }

    #[test]
    fn alternating_color_finisher_mid_pattern_is_fine() {
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, 400.0, 4)
            .circle(1000.0)
            .object(HitObject::circle(1400.0).kat().finisher())
            .circle(1600.0)
            .circle(3000.0)
            .build();

        let issues = run(&beatmap, &cfg()).unwrap();
        assert!(!issues.iter().any(|i| i.template == "mono_warning"));
    }
}
