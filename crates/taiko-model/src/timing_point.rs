use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// A timing point from the beatmap's timing section.
///
/// Uninherited ("red line") points define tempo and meter; inherited
/// ("green line") points only adjust slider velocity. Analysis that needs
/// tempo always resolves the governing uninherited point first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingPoint {
    /// Start time in milliseconds.
    pub offset: f64,
    /// Raw beat duration in milliseconds.
    pub ms_per_beat: f64,
    /// Beats per bar.
    pub meter: u32,
    /// Whether this point defines tempo (uninherited / red line).
    pub uninherited: bool,
    /// Suppresses the implicit barline at this point's offset.
    pub omits_barline: bool,
    /// Kiai flag, active from this point until the next one.
    pub kiai: bool,
}

impl TimingPoint {
    /// A tempo-defining red line.
    pub fn uninherited(offset: f64, ms_per_beat: f64, meter: u32) -> Self {
        Self {
            offset,
            ms_per_beat,
            meter,
            uninherited: true,
            omits_barline: false,
            kiai: false,
        }
    }

    /// A slider-velocity green line. Tempo fields are carried over by the
    /// parser; the analysis core never reads them off inherited points.
    pub fn inherited(offset: f64) -> Self {
        Self {
            offset,
            ms_per_beat: -100.0,
            meter: 4,
            uninherited: false,
            omits_barline: false,
            kiai: false,
        }
    }

    pub fn with_kiai(mut self, kiai: bool) -> Self {
        self.kiai = kiai;
        self
    }

    pub fn with_omitted_barline(mut self) -> Self {
        self.omits_barline = true;
        self
    }

    /// Bar duration in milliseconds.
    ///
    /// Fails on non-positive tempo or meter, which would make the modular
    /// barline arithmetic undefined.
    pub fn bar_gap_ms(&self) -> Result<f64> {
        ensure!(
            self.ms_per_beat > 0.0 && self.ms_per_beat.is_finite(),
            "timing point at {}ms has invalid ms_per_beat ({})",
            self.offset,
            self.ms_per_beat
        );
        ensure!(
            self.meter > 0,
            "timing point at {}ms has zero meter",
            self.offset
        );
        Ok(self.ms_per_beat * self.meter as f64)
    }
}
