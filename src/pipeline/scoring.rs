//! Vulnerability scoring: four thresholded sub-scores summed into a 0..=8
//! index, then split into three display tiers.

use serde::Serialize;

use crate::model::district::{DistrictRecord, IncomeLevel};
use crate::model::error::ScoringError;
use crate::model::thresholds::{MAX_SCORE, ScoringThresholds};
use crate::model::tier::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SubScores {
    pub heat: u8,
    pub vegetation: u8,
    pub elderly: u8,
    pub income: u8,
}

impl SubScores {
    pub fn total(&self) -> u8 {
        self.heat + self.vegetation + self.elderly + self.income
    }
}

#[derive(Debug, Clone)]
pub struct VulnerabilityScore<'a> {
    pub district: &'a DistrictRecord,
    pub sub_scores: SubScores,
    pub score: u8,
    pub tier: Tier,
}

pub fn heat_sub_score(lst_celsius: f64, t: &ScoringThresholds) -> u8 {
    if lst_celsius > t.heat_high_c {
        2
    } else if lst_celsius > t.heat_moderate_c {
        1
    } else {
        0
    }
}

pub fn vegetation_sub_score(ndvi_percent: f64, t: &ScoringThresholds) -> u8 {
    if ndvi_percent < t.ndvi_severe_pct {
        2
    } else if ndvi_percent < t.ndvi_moderate_pct {
        1
    } else {
        0
    }
}

pub fn elderly_sub_score(elderly_percent: f64, t: &ScoringThresholds) -> u8 {
    if elderly_percent > t.elderly_high_pct {
        2
    } else if elderly_percent > t.elderly_moderate_pct {
        1
    } else {
        0
    }
}

pub fn income_sub_score(income: IncomeLevel) -> u8 {
    match income {
        IncomeLevel::Low => 2,
        IncomeLevel::Medium => 1,
        IncomeLevel::High => 0,
    }
}

pub fn compute_sub_scores(record: &DistrictRecord, t: &ScoringThresholds) -> SubScores {
    SubScores {
        heat: heat_sub_score(record.lst_celsius, t),
        vegetation: vegetation_sub_score(record.ndvi_percent, t),
        elderly: elderly_sub_score(record.elderly_percent, t),
        income: income_sub_score(record.income_level),
    }
}

/// Score a district with the default cut points.
///
/// Income is already a closed enum here, so an unrecognized category can only
/// fail earlier, where the literal is parsed.
pub fn compute_score(record: &DistrictRecord) -> u8 {
    compute_sub_scores(record, &ScoringThresholds::default_v1()).total()
}

pub fn classify_tier(score: u8) -> Result<Tier, ScoringError> {
    classify_tier_with(score, &ScoringThresholds::default_v1())
}

pub fn classify_tier_with(score: u8, t: &ScoringThresholds) -> Result<Tier, ScoringError> {
    if score > MAX_SCORE {
        return Err(ScoringError::OutOfRange(score));
    }
    let tier = if score >= t.tier_high_min {
        Tier::High
    } else if score >= t.tier_medium_min {
        Tier::Medium
    } else {
        Tier::Low
    };
    Ok(tier)
}

pub fn score_district<'a>(
    record: &'a DistrictRecord,
    t: &ScoringThresholds,
) -> Result<VulnerabilityScore<'a>, ScoringError> {
    let sub_scores = compute_sub_scores(record, t);
    let score = sub_scores.total();
    let tier = classify_tier_with(score, t)?;
    Ok(VulnerabilityScore {
        district: record,
        sub_scores,
        score,
        tier,
    })
}

pub fn score_districts<'a>(
    records: &'a [DistrictRecord],
    t: &ScoringThresholds,
) -> Result<Vec<VulnerabilityScore<'a>>, ScoringError> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let scored = score_district(record, t)?;
        tracing::debug!(
            district = %record.name,
            heat = scored.sub_scores.heat,
            vegetation = scored.sub_scores.vegetation,
            elderly = scored.sub_scores.elderly,
            income = scored.sub_scores.income,
            score = scored.score,
            tier = scored.tier.name(),
            "scored district"
        );
        out.push(scored);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/scoring.rs"]
mod tests;
