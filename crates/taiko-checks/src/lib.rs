// Taiko beatmap rule engine: timing analysis, pattern segmentation,
// and the ranking-criteria analyzer set.

pub mod checks;
pub mod config;
pub mod engine;
pub mod nav;
pub mod pattern;
pub mod registry;
pub mod timing;

pub use config::AnalysisConfig;
pub use registry::{
    CHECKS, Category, Check, CheckFn, CheckReport, analyze_beatmap, analyze_mapset,
};
