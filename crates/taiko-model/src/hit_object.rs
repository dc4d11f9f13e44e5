use serde::{Deserialize, Serialize};

/// The three taiko object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitObjectKind {
    Circle,
    Slider,
    Spinner,
}

/// Hit-sound additions carried by an object.
///
/// Whistle and Clap mark a circle as a Kat; Finish marks a big note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HitSounds {
    pub whistle: bool,
    pub clap: bool,
    pub finish: bool,
}

/// A single hit object, ordered by start time within a beatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitObject {
    /// Start time in milliseconds.
    pub time: f64,
    /// End time in milliseconds; equals `time` for circles.
    pub end_time: f64,
    pub kind: HitObjectKind,
    pub hit_sounds: HitSounds,
}

impl HitObject {
    pub fn circle(time: f64) -> Self {
        Self {
            time,
            end_time: time,
            kind: HitObjectKind::Circle,
            hit_sounds: HitSounds::default(),
        }
    }

    pub fn slider(time: f64, end_time: f64) -> Self {
        Self {
            time,
            end_time,
            kind: HitObjectKind::Slider,
            hit_sounds: HitSounds::default(),
        }
    }

    pub fn spinner(time: f64, end_time: f64) -> Self {
        Self {
            time,
            end_time,
            kind: HitObjectKind::Spinner,
            hit_sounds: HitSounds::default(),
        }
    }

    pub fn with_hit_sounds(mut self, hit_sounds: HitSounds) -> Self {
        self.hit_sounds = hit_sounds;
        self
    }

    /// Turn a circle into a Kat (Whistle addition).
    pub fn kat(mut self) -> Self {
        self.hit_sounds.whistle = true;
        self
    }

    /// Mark as a finisher (Finish addition).
    pub fn finisher(mut self) -> Self {
        self.hit_sounds.finish = true;
        self
    }

    pub fn is_circle(&self) -> bool {
        self.kind == HitObjectKind::Circle
    }

    pub fn is_spinner(&self) -> bool {
        self.kind == HitObjectKind::Spinner
    }

    /// A Don is a circle without Whistle or Clap additions.
    pub fn is_don(&self) -> bool {
        self.is_circle() && !self.hit_sounds.whistle && !self.hit_sounds.clap
    }

    /// A Kat is a circle with a Whistle or Clap addition.
    pub fn is_kat(&self) -> bool {
        self.is_circle() && (self.hit_sounds.whistle || self.hit_sounds.clap)
    }

    pub fn is_finisher(&self) -> bool {
        self.hit_sounds.finish
    }
}
