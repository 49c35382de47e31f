use serde::Serialize;

/// Cut points for the four vulnerability sub-scores and the tier split.
///
/// Upper cut points (`*_high`, `*_severe`) award 2 points, lower ones award 1.
/// Heat and elderly comparisons are strict `>`; vegetation is strict `<`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringThresholds {
    pub heat_high_c: f64,
    pub heat_moderate_c: f64,
    pub ndvi_severe_pct: f64,
    pub ndvi_moderate_pct: f64,
    pub elderly_high_pct: f64,
    pub elderly_moderate_pct: f64,
    pub tier_high_min: u8,
    pub tier_medium_min: u8,
}

pub const MAX_SCORE: u8 = 8;

impl ScoringThresholds {
    pub fn default_v1() -> Self {
        Self {
            heat_high_c: 36.0,
            heat_moderate_c: 35.0,
            ndvi_severe_pct: 20.0,
            ndvi_moderate_pct: 25.0,
            elderly_high_pct: 13.0,
            elderly_moderate_pct: 10.0,
            tier_high_min: 6,
            tier_medium_min: 4,
        }
    }
}
