use taiko_checks::{AnalysisConfig, CHECKS, CheckFn, analyze_beatmap, analyze_mapset};
use taiko_model::test_support::{BeatmapBuilder, mapset};
use taiko_model::{HitObject, Severity, Tier, TimingPoint};

// A small but realistic mapset: three difficulties sharing timing, with a
// handful of deliberate rule violations planted in the Oni.
fn sample_mapset() -> taiko_model::BeatmapSet {
    let kantan = BeatmapBuilder::new(Tier::Kantan)
        .version("Kantan")
        .red_line(0.0, 400.0, 4)
        .timing_point(TimingPoint::inherited(4800.0).with_kiai(true))
        .timing_point(TimingPoint::inherited(11200.0))
        .circles(1000.0, 1600.0, 8)
        .background("bg.jpg", 0, 0)
        .hp_drain(8.0)
        .overall_difficulty(3.0)
        .drain_time_ms(150_000.0)
        .build();

    let muzukashii = BeatmapBuilder::new(Tier::Muzukashii)
        .version("Muzukashii")
        .red_line(0.0, 400.0, 4)
        .timing_point(TimingPoint::inherited(4800.0).with_kiai(true))
        .timing_point(TimingPoint::inherited(11200.0))
        .circles(1000.0, 800.0, 16)
        .background("bg.jpg", 0, 0)
        .hp_drain(6.0)
        .overall_difficulty(5.0)
        .drain_time_ms(150_000.0)
        .build();

    let oni = BeatmapBuilder::new(Tier::Oni)
        .version("Oni")
        .red_line(0.0, 400.0, 4)
        // Red line just past a downbeat: double barline.
        .red_line(16010.0, 400.0, 4)
        .timing_point(TimingPoint::inherited(4800.0).with_kiai(true))
        // Kiai off, back on 150ms later: a flash.
        .timing_point(TimingPoint::inherited(11200.0))
        .timing_point(TimingPoint::inherited(11350.0).with_kiai(true))
        .timing_point(TimingPoint::inherited(12000.0))
        .circles(1000.0, 400.0, 8)
        // Two circles 30ms apart: under every tier's smallest snap.
        .circle(5000.0)
        .circle(5030.0)
        // Finisher 90ms before the next note: under the Oni 1/4 floor.
        .object(HitObject::circle(6000.0).finisher())
        .circle(6090.0)
        // Background shifted relative to the other difficulties.
        .background("bg.jpg", 0, 12)
        .hp_drain(5.5)
        .overall_difficulty(5.5)
        .drain_time_ms(150_000.0)
        .build();

    mapset(vec![kantan, muzukashii, oni])
}

#[test]
fn full_pass_covers_every_check() {
    let _ = env_logger::builder().is_test(true).try_init();

    let set = sample_mapset();
    let reports = analyze_mapset(&set, &AnalysisConfig::default());

    for check in CHECKS {
        assert!(
            reports.iter().any(|r| r.check == check.name),
            "no report from {}",
            check.name
        );
    }
    assert!(reports.iter().all(|r| r.error.is_none()));
}

#[test]
fn planted_violations_are_found() {
    let set = sample_mapset();
    let reports = analyze_mapset(&set, &AnalysisConfig::default());

    let issues_of = |name: &str| -> Vec<_> {
        reports
            .iter()
            .filter(|r| r.check == name)
            .flat_map(|r| r.issues.iter())
            .collect()
    };

    // The Oni's second red line lands 10ms past a downbeat.
    let double_barlines = issues_of("double_barline");
    assert_eq!(double_barlines.len(), 1);
    assert_eq!(double_barlines[0].severity, Severity::Problem);

    // 30ms between circles violates even the Oni 1/8 floor.
    assert!(!issues_of("smallest_snap").is_empty());

    // Finisher into a 1/4 gap.
    let finishers = issues_of("unrankable_finisher");
    assert!(
        finishers
            .iter()
            .any(|i| i.tiers.contains(Tier::Oni) && i.severity == Severity::Problem)
    );

    // 150ms kiai off-period.
    assert!(!issues_of("kiai_flash").is_empty());

    // The Oni's kiai sequence and background offset both deviate.
    assert!(!issues_of("kiai_consistency").is_empty());
    assert_eq!(issues_of("bg_offset_consistency").len(), 1);

    // Every difficulty's settings match its own tier's recommendation;
    // deviations tagged for the other tiers are expected noise.
    for report in reports.iter().filter(|r| r.check == "hp_od") {
        let version = report.beatmap.as_deref().unwrap();
        let tier = set
            .beatmaps
            .iter()
            .find(|b| b.version == version)
            .unwrap()
            .tier;
        assert!(report.issues.iter().all(|i| !i.tiers.contains(tier)));
    }
}

#[test]
fn clean_difficulty_reports_no_issues_for_its_tier() {
    let set = sample_mapset();
    let kantan = &set.beatmaps[0];
    let reports = analyze_beatmap(kantan, &AnalysisConfig::default());

    for report in &reports {
        assert!(
            report.issues.iter().all(|i| !i.tiers.contains(Tier::Kantan)),
            "{} flagged the clean Kantan: {:?}",
            report.check,
            report.issues
        );
        assert!(report.error.is_none());
    }
}

#[test]
fn per_beatmap_reports_name_their_difficulty() {
    let set = sample_mapset();
    let reports = analyze_mapset(&set, &AnalysisConfig::default());

    for report in &reports {
        let check = CHECKS.iter().find(|c| c.name == report.check).unwrap();
        match check.func {
            CheckFn::Beatmap(_) => assert!(report.beatmap.is_some()),
            CheckFn::Mapset(_) => assert!(report.beatmap.is_none()),
        }
    }
}

#[test]
fn issues_are_ordered_by_time_within_a_tier() {
    let set = sample_mapset();
    let reports = analyze_mapset(&set, &AnalysisConfig::default());

    for report in &reports {
        for tier in Tier::ALL {
            let starts: Vec<f64> = report
                .issues
                .iter()
                .filter(|i| i.tiers.contains(tier))
                .filter_map(|i| i.span.map(|s| s.start()))
                .collect();
            assert!(
                starts.windows(2).all(|w| w[0] <= w[1]),
                "{} emitted out of order for {tier:?}",
                report.check
            );
        }
    }
}
