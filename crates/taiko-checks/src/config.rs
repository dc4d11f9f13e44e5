use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Shared numeric configuration for every analyzer.
///
/// Constructed once per analysis pass and passed by reference; nothing here
/// is ambient global state. Defaults follow the current taiko
/// ranking-criteria recommendations, but hosts tracking a newer revision of
/// the criteria can override individual thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Tolerance applied wherever a gap is compared against a threshold,
    /// absorbing floating-point drift from chained multiplications.
    pub ms_epsilon: f64,
    /// Band within which a bar remainder counts as a rounding error rather
    /// than a genuine double barline.
    pub rounding_error_margin_ms: f64,
    /// Two barlines closer than this are considered doubled.
    pub double_barline_threshold_ms: f64,
    /// Upper edge of the tempo normalization band.
    pub normalize_max_bpm: f64,
    /// Lower edge of the tempo normalization band.
    pub normalize_min_bpm: f64,
    /// Edge of the extra /1.5 folding step that keeps 3/4-related tempos
    /// from being conflated with 4/4 ones.
    pub normalize_fold_bpm: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ms_epsilon: 0.5,
            rounding_error_margin_ms: 2.0,
            double_barline_threshold_ms: 50.0,
            normalize_max_bpm: 270.0,
            normalize_min_bpm: 110.0,
            normalize_fold_bpm: 130.0,
        }
    }
}

impl AnalysisConfig {
    /// Loads config from a JSON file. Missing fields take their defaults;
    /// a missing file is not an error and yields the full defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading analysis config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing analysis config {}", path.display()))?;
        Ok(config)
    }
}
