use clap::ValueEnum;
use rand::Rng;
use serde::Serialize;

use crate::pipeline::seed::selection_rng;

pub const SERIES_LEN: usize = 10;
pub const MITIGATION_NOTE: &str = "Green interventions can reduce LST by 2-4°C per local zone.";

const BEFORE_BASE_C: f64 = 32.0;
const BEFORE_SPAN_C: f64 = 4.0;
const AFTER_BASE_C: f64 = 28.0;
const AFTER_SPAN_C: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Strategy {
    TreePlanting,
    GreenRoofs,
    CoolPavement,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::TreePlanting => "Tree Planting",
            Strategy::GreenRoofs => "Green Roofs",
            Strategy::CoolPavement => "Cool Pavement",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MitigationSeries {
    pub strategy: &'static str,
    pub district: String,
    pub before_c: Vec<f64>,
    pub after_c: Vec<f64>,
    pub mean_reduction_c: f64,
    pub note: &'static str,
}

pub fn simulate_mitigation(strategy: Strategy, district: &str, seed: u64) -> MitigationSeries {
    let mut rng = selection_rng(seed, &["plan", strategy.label(), district]);
    let before_c: Vec<f64> = (0..SERIES_LEN)
        .map(|_| rng.gen_range(BEFORE_BASE_C..BEFORE_BASE_C + BEFORE_SPAN_C))
        .collect();
    let after_c: Vec<f64> = (0..SERIES_LEN)
        .map(|_| rng.gen_range(AFTER_BASE_C..AFTER_BASE_C + AFTER_SPAN_C))
        .collect();

    let mean_reduction_c = before_c
        .iter()
        .zip(after_c.iter())
        .map(|(b, a)| b - a)
        .sum::<f64>()
        / SERIES_LEN as f64;

    MitigationSeries {
        strategy: strategy.label(),
        district: district.to_string(),
        before_c,
        after_c,
        mean_reduction_c,
        note: MITIGATION_NOTE,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mitigation.rs"]
mod tests;
