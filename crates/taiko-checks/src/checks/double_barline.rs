//! Two barlines within 50ms of each other, caused by a tempo point landing
//! just after a downbeat of the previous one.

use anyhow::Result;
use taiko_model::{Beatmap, Issue, Severity, TierSet};

use crate::config::AnalysisConfig;
use crate::registry::{Category, Check, CheckFn};

pub const CHECK: Check = Check {
    name: "double_barline",
    category: Category::Timing,
    tiers: TierSet::ALL,
    func: CheckFn::Beatmap(run),
};

fn run(beatmap: &Beatmap, cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    let red_lines: Vec<_> = beatmap.uninherited_points().collect();
    let mut issues = Vec::new();

    for pair in red_lines.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let bar_gap = current.bar_gap_ms()?;
        let distance = next.offset - current.offset;

        // An omitted barline on the next line can't double up; neither can
        // an omitting current line that lasts at most one bar.
        if next.omits_barline || (current.omits_barline && distance <= bar_gap) {
            continue;
        }

        let rest = distance % bar_gap;

        if rest - bar_gap > -cfg.rounding_error_margin_ms {
            // A hair short of a full bar: the next downbeat lands just after
            // the new line's own barline.
            issues.push(
                Issue::new("rounding_error", Severity::Warning)
                    .at(next.offset)
                    .for_tiers(TierSet::ALL),
            );
        } else if rest <= cfg.double_barline_threshold_ms && rest > 0.0 {
            let severity = if rest >= cfg.ms_epsilon {
                Severity::Problem
            } else {
                Severity::Warning
            };
            issues.push(
                Issue::new(
                    if severity == Severity::Problem { "problem" } else { "warning" },
                    severity,
                )
                .at(next.offset)
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
    use taiko_model::{Span, Tier, TimingPoint};

    fn cfg() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    // 500ms/beat, meter 4: a bar every 2000ms.
    fn map_with_second_line(offset: f64) -> Beatmap {
        BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, 500.0, 4)
            .red_line(offset, 500.0, 4)
            .build()
    }

    #[test]
    fn line_just_past_a_downbeat_is_a_problem() {
        let issues = run(&map_with_second_line(2010.0), &cfg()).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Problem);
        assert_eq!(issues[0].span, Some(Span::At(2010.0)));
    }

    #[test]
    fn line_sub_epsilon_past_a_downbeat_is_only_a_warning() {
        let issues = run(&map_with_second_line(2000.3), &cfg()).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].template, "warning");
    }

    #[test]
    fn line_well_clear_of_the_downbeat_is_fine() {
        assert!(run(&map_with_second_line(2060.0), &cfg()).unwrap().is_empty());
        assert!(run(&map_with_second_line(2000.0), &cfg()).unwrap().is_empty());
    }

    #[test]
    fn line_just_short_of_a_downbeat_is_a_rounding_error() {
        let issues = run(&map_with_second_line(3999.0), &cfg()).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].template, "rounding_error");
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn omitted_barline_on_next_line_is_skipped() {
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, 500.0, 4)
            .timing_point(TimingPoint::uninherited(2010.0, 500.0, 4).with_omitted_barline())
            .build();
        assert!(run(&beatmap, &cfg()).unwrap().is_empty());
    }

    #[test]
    fn omitting_current_line_spanning_one_bar_is_skipped() {
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .timing_point(TimingPoint::uninherited(0.0, 500.0, 4).with_omitted_barline())
            .red_line(1500.0, 500.0, 4)
            .build();
        assert!(run(&beatmap, &cfg()).unwrap().is_empty());
    }

    #[test]
    fn invalid_beat_duration_is_an_error() {
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, -500.0, 4)
            .red_line(2010.0, 500.0, 4)
            .build();
        assert!(run(&beatmap, &cfg()).is_err());
    }
}
