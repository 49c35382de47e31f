use serde::Serialize;

use crate::model::district::Coordinates;
use crate::model::thresholds::ScoringThresholds;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct TierStat {
    pub tier: &'static str,
    pub color: &'static str,
    pub count: usize,
    pub fraction: f64,
    pub districts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedDistrict {
    pub name: String,
    pub score: u8,
    pub tier: &'static str,
    pub sub_scores: [u8; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub source: String,
    pub thresholds: ScoringThresholds,
    pub n_districts: usize,
    pub score_median: f64,
    pub score_mean: f64,
    pub score_max: u8,
    pub tiers: Vec<TierStat>,
    pub top_districts: Vec<RankedDistrict>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerPopup {
    pub lst_c: f64,
    pub ndvi_pct: f64,
    pub elderly_pct: f64,
    pub income: &'static str,
}

/// One circle marker on the vulnerability map.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub district: String,
    pub position: Coordinates,
    pub color: &'static str,
    pub radius: f64,
    pub fill_opacity: f64,
    pub score: u8,
    pub tier: &'static str,
    pub popup: MarkerPopup,
}

pub fn format_fixed(v: f64, digits: usize) -> String {
    format!("{:.*}", digits, v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
