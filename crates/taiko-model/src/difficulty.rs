use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// The six taiko difficulty tiers, easiest to hardest.
///
/// A beatmap belongs to exactly one tier; analyzers use tiers as lookup keys
/// into their threshold tables and tag issues with the tiers they apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Kantan,
    Futsuu,
    Muzukashii,
    Oni,
    Inner,
    Ura,
}

impl Tier {
    pub const ALL: [Tier; 6] = [
        Tier::Kantan,
        Tier::Futsuu,
        Tier::Muzukashii,
        Tier::Oni,
        Tier::Inner,
        Tier::Ura,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Kantan => "Kantan",
            Tier::Futsuu => "Futsuu",
            Tier::Muzukashii => "Muzukashii",
            Tier::Oni => "Oni",
            Tier::Inner => "Inner Oni",
            Tier::Ura => "Ura Oni",
        }
    }
}

/// Per-tier value table indexed by tier ordinal.
///
/// Replaces parallel maps keyed by the same tier set: every tier always has
/// exactly one slot, so the "all tables share a key set" invariant holds by
/// construction instead of by discipline.
#[derive(Debug, Clone, PartialEq)]
pub struct PerTier<T>([T; 6]);

impl<T> PerTier<T> {
    pub fn from_fn(mut f: impl FnMut(Tier) -> T) -> Self {
        Self(std::array::from_fn(|i| f(Tier::ALL[i])))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &T)> {
        Tier::ALL.iter().copied().zip(self.0.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Tier, &mut T)> {
        Tier::ALL.iter().copied().zip(self.0.iter_mut())
    }
}

impl<T: Default> Default for PerTier<T> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T> Index<Tier> for PerTier<T> {
    type Output = T;

    fn index(&self, tier: Tier) -> &T {
        &self.0[tier.index()]
    }
}

impl<T> IndexMut<Tier> for PerTier<T> {
    fn index_mut(&mut self, tier: Tier) -> &mut T {
        &mut self.0[tier.index()]
    }
}

/// Set of tiers an issue applies to, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TierSet(u8);

impl TierSet {
    pub const EMPTY: TierSet = TierSet(0);
    pub const ALL: TierSet = TierSet(0b11_1111);

    pub const fn single(tier: Tier) -> TierSet {
        TierSet(1 << tier.index())
    }

    pub const fn with(self, tier: Tier) -> TierSet {
        TierSet(self.0 | 1 << tier.index())
    }

    pub const fn contains(self, tier: Tier) -> bool {
        self.0 & (1 << tier.index()) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Tier> {
        Tier::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl FromIterator<Tier> for TierSet {
    fn from_iter<I: IntoIterator<Item = Tier>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TierSet::EMPTY, |set, tier| set.with(tier))
    }
}
