use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use thiserror::Error;

use crate::model::thresholds::ScoringThresholds;
use crate::model::tier::tier_order;
use crate::pipeline::heatmap::LstSample;
use crate::pipeline::scoring::VulnerabilityScore;
use crate::report::json::{render_markers_json, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::{
    Marker, MarkerPopup, RankedDistrict, SummaryData, TierStat, format_fixed, mean, median,
};

pub const MARKER_RADIUS: f64 = 10.0;
pub const MARKER_FILL_OPACITY: f64 = 0.7;
const TOP_DISTRICTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    District,
    Tier,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub scored: &'a [VulnerabilityScore<'a>],
    pub thresholds: &'a ScoringThresholds,
    pub source: String,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(
    input: &ReportInput<'_>,
    out_dir: &Path,
    mode: ReportMode,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let table_path = out_dir.join("vulnerability.tsv");
    match mode {
        ReportMode::District => write_district_tsv(input.scored, &table_path)?,
        ReportMode::Tier => write_tier_tsv(input.scored, &table_path)?,
    }

    let summary = build_summary(input);
    write_text(&out_dir.join("summary.json"), &render_summary_json(&summary)?)?;

    let markers = build_markers(input.scored);
    write_text(&out_dir.join("markers.json"), &render_markers_json(&markers)?)?;

    write_text(&out_dir.join("report.txt"), &render_report_text(&summary))?;

    tracing::info!(out_dir = %out_dir.display(), "wrote vulnerability reports");
    Ok(())
}

fn write_district_tsv(scored: &[VulnerabilityScore<'_>], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "district",
        "lst_c",
        "ndvi_pct",
        "elderly_pct",
        "income",
        "heat_sub",
        "vegetation_sub",
        "elderly_sub",
        "income_sub",
        "score",
        "tier",
        "color",
        "lat",
        "lon",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for s in scored {
        let d = s.district;
        let row = [
            d.name.clone(),
            format_fixed(d.lst_celsius, 2),
            format_fixed(d.ndvi_percent, 2),
            format_fixed(d.elderly_percent, 2),
            d.income_level.to_string(),
            s.sub_scores.heat.to_string(),
            s.sub_scores.vegetation.to_string(),
            s.sub_scores.elderly.to_string(),
            s.sub_scores.income.to_string(),
            s.score.to_string(),
            s.tier.name().to_string(),
            s.tier.color().to_string(),
            format_fixed(d.coordinates.lat, 6),
            format_fixed(d.coordinates.lon, 6),
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }
    w.flush()
}

fn write_tier_tsv(scored: &[VulnerabilityScore<'_>], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "tier\tn_districts\tfraction\tdistricts")?;
    for stat in tier_stats(scored) {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            stat.tier,
            stat.count,
            format_fixed(stat.fraction, 6),
            stat.districts.join(",")
        )?;
    }
    w.flush()
}

pub fn write_heatmap_tsv(
    samples: &[LstSample],
    day: &str,
    path: &Path,
) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "day\tlat\tlon\tlst_c\tband\tcolor\tradius")?;
    for s in samples {
        let band = s.band();
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            day,
            format_fixed(s.position.lat, 6),
            format_fixed(s.position.lon, 6),
            format_fixed(s.lst_c, 2),
            band.name(),
            band.color(),
            format_fixed(s.marker_radius(), 3)
        )?;
    }
    w.flush()?;
    Ok(())
}

fn tier_stats(scored: &[VulnerabilityScore<'_>]) -> Vec<TierStat> {
    let n = scored.len();
    tier_order()
        .iter()
        .map(|&tier| {
            let districts: Vec<String> = scored
                .iter()
                .filter(|s| s.tier == tier)
                .map(|s| s.district.name.clone())
                .collect();
            let count = districts.len();
            TierStat {
                tier: tier.name(),
                color: tier.color(),
                count,
                fraction: if n > 0 { count as f64 / n as f64 } else { 0.0 },
                districts,
            }
        })
        .collect()
}

fn ranked(scored: &[VulnerabilityScore<'_>]) -> Vec<RankedDistrict> {
    let mut order: Vec<&VulnerabilityScore<'_>> = scored.iter().collect();
    order.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.district.name.cmp(&b.district.name))
    });
    order
        .into_iter()
        .take(TOP_DISTRICTS)
        .map(|s| RankedDistrict {
            name: s.district.name.clone(),
            score: s.score,
            tier: s.tier.name(),
            sub_scores: [
                s.sub_scores.heat,
                s.sub_scores.vegetation,
                s.sub_scores.elderly,
                s.sub_scores.income,
            ],
        })
        .collect()
}

pub fn build_summary(input: &ReportInput<'_>) -> SummaryData {
    let scores: Vec<f64> = input.scored.iter().map(|s| s.score as f64).collect();
    SummaryData {
        tool: input.tool_name.clone(),
        version: input.tool_version.clone(),
        source: input.source.clone(),
        thresholds: input.thresholds.clone(),
        n_districts: input.scored.len(),
        score_median: median(&scores),
        score_mean: mean(&scores),
        score_max: input.scored.iter().map(|s| s.score).max().unwrap_or(0),
        tiers: tier_stats(input.scored),
        top_districts: ranked(input.scored),
    }
}

pub fn build_markers(scored: &[VulnerabilityScore<'_>]) -> Vec<Marker> {
    scored
        .iter()
        .map(|s| Marker {
            district: s.district.name.clone(),
            position: s.district.coordinates,
            color: s.tier.color(),
            radius: MARKER_RADIUS,
            fill_opacity: MARKER_FILL_OPACITY,
            score: s.score,
            tier: s.tier.name(),
            popup: MarkerPopup {
                lst_c: s.district.lst_celsius,
                ndvi_pct: s.district.ndvi_percent,
                elderly_pct: s.district.elderly_percent,
                income: s.district.income_level.as_str(),
            },
        })
        .collect()
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(text.as_bytes())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/report.rs"]
mod tests;
