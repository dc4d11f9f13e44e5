//! Map's final object unsnapped 1ms before a barline, which stops the
//! client from rendering that barline at all.

use anyhow::{Context, Result};
use taiko_model::{Beatmap, Issue, Severity, TierSet};

use crate::config::AnalysisConfig;
use crate::registry::{Category, Check, CheckFn};
use crate::timing::offset_from_next_barline_ms;

pub const CHECK: Check = Check {
    name: "last_note_hiding_barline",
    category: Category::Timing,
    tiers: TierSet::ALL,
    func: CheckFn::Beatmap(run),
};

fn run(beatmap: &Beatmap, _cfg: &AnalysisConfig) -> Result<Vec<Issue>> {
    let Some(last) = beatmap.hit_objects.last() else {
        return Ok(Vec::new());
    };

    let point = beatmap
        .uninherited_point_at(last.end_time)
        .context("beatmap has no uninherited timing point")?;
    let unsnap = offset_from_next_barline_ms(beatmap, last.end_time, point)?;

    if unsnap > -2.0 && unsnap <= -1.0 {
        // A hidden barline behind a circle is plainly visible during play;
        // behind a slider or spinner tail it only reads as slightly off.
        let severity = if last.is_circle() { Severity::Problem } else { Severity::Minor };
        return Ok(vec![
            Issue::new(
                if severity == Severity::Problem { "problem" } else { "minor" },
                severity,
            )
            .at(last.end_time)
            .for_tiers(TierSet::ALL),
        ]);
    }

    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use taiko_model::Tier;
    use taiko_model::test_support::BeatmapBuilder;

    fn cfg() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    // 500ms/beat, meter 4: barlines every 2000ms.

    #[test]
    fn circle_one_ms_before_a_barline_is_a_problem() {
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, 500.0, 4)
            .circle(3999.0)
            .build();

        let issues = run(&beatmap, &cfg()).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Problem);
    }

    #[test]
    fn slider_tail_one_ms_before_a_barline_is_minor() {
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, 500.0, 4)
            .slider(3000.0, 3999.0)
            .build();

        let issues = run(&beatmap, &cfg()).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Minor);
    }

    #[test]
    fn snapped_last_note_is_fine() {
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, 500.0, 4)
            .circle(4000.0)
            .build();
        assert!(run(&beatmap, &cfg()).unwrap().is_empty());
    }

    #[test]
    fn two_ms_early_is_outside_the_window() {
        let beatmap = BeatmapBuilder::new(Tier::Oni)
            .red_line(0.0, 500.0, 4)
            .circle(3998.0)
            .build();
        assert!(run(&beatmap, &cfg()).unwrap().is_empty());
    }

    #[test]
    fn empty_beatmap_is_fine() {
        let beatmap = BeatmapBuilder::new(Tier::Oni).red_line(0.0, 500.0, 4).build();
        assert!(run(&beatmap, &cfg()).unwrap().is_empty());
    }
}
