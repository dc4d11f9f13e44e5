//! The analyzer set. Each module owns one rule: its tier thresholds, the
//! engine it drives, and the severity mapping for what it measures.

use taiko_model::{Tier, TierSet};

pub mod barline_sv;
pub mod bg_offset_consistency;
pub mod conflicting_kiais;
pub mod double_barline;
pub mod first_note_stuttering;
pub mod hp_od;
pub mod kiai_consistency;
pub mod kiai_flash;
pub mod last_note_hiding_barline;
pub mod pattern_length;
pub mod rest_moment;
pub mod smallest_snap;
pub mod spinner_readability;
pub mod unrankable_finisher;

/// The four tiers the ranking criteria give explicit per-tier thresholds;
/// Inner and Ura inherit Oni's rules where a check covers them at all.
pub(crate) const LOWER_FOUR: TierSet = TierSet::single(Tier::Kantan)
    .with(Tier::Futsuu)
    .with(Tier::Muzukashii)
    .with(Tier::Oni);
