use crate::model::thresholds::ScoringThresholds;
use crate::report::{RankedDistrict, SummaryData, TierStat, format_fixed};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("District Heat Vulnerability Report\n");
    out.push_str("==================================\n\n");

    out.push_str("1. Overview\n");
    out.push_str(&format!("Source: {}\n", data.source));
    out.push_str(&format!("Districts scored: {}\n", data.n_districts));
    out.push_str(&format!(
        "Score median: {}\nScore mean: {}\nScore max: {}\n",
        format_fixed(data.score_median, 1),
        format_fixed(data.score_mean, 2),
        data.score_max
    ));
    out.push_str(&format!("Overall: {}\n\n", overall_statement(&data.tiers)));

    out.push_str("2. Tier distribution\n");
    for t in &data.tiers {
        out.push_str(&format!(
            "{} ({}): {} ({})",
            t.tier,
            t.color,
            t.count,
            format_fixed(t.fraction, 3)
        ));
        if !t.districts.is_empty() {
            out.push_str(&format!(" - {}", t.districts.join(", ")));
        }
        out.push('\n');
    }
    out.push('\n');

    out.push_str("3. Highest-risk districts\n");
    if data.top_districts.is_empty() {
        out.push_str("none\n");
    }
    for d in &data.top_districts {
        out.push_str(&format!("{}\n", ranked_line(d)));
    }
    out.push('\n');

    out.push_str("4. Scoring rules\n");
    out.push_str(&rules_text(&data.thresholds));
    out.push('\n');

    out.push_str("5. Caveats\n");
    out.push_str("Indicators are static demonstration values, not live satellite retrievals.\n");

    out
}

fn ranked_line(d: &RankedDistrict) -> String {
    let [heat, vegetation, elderly, income] = d.sub_scores;
    format!(
        "{}: score {} [{}] (heat {}, vegetation {}, elderly {}, income {})",
        d.name, d.score, d.tier, heat, vegetation, elderly, income
    )
}

fn rules_text(t: &ScoringThresholds) -> String {
    format!(
        "Heat: LST > {}°C -> 2, > {}°C -> 1\n\
         Vegetation: NDVI < {}% -> 2, < {}% -> 1\n\
         Elderly: share > {}% -> 2, > {}% -> 1\n\
         Income: Low -> 2, Medium -> 1, High -> 0\n\
         Tiers: High >= {}, Medium >= {}, Low otherwise\n",
        format_fixed(t.heat_high_c, 1),
        format_fixed(t.heat_moderate_c, 1),
        format_fixed(t.ndvi_severe_pct, 1),
        format_fixed(t.ndvi_moderate_pct, 1),
        format_fixed(t.elderly_high_pct, 1),
        format_fixed(t.elderly_moderate_pct, 1),
        t.tier_high_min,
        t.tier_medium_min,
    )
}

fn overall_statement(tiers: &[TierStat]) -> &'static str {
    let fraction = |name: &str| {
        tiers
            .iter()
            .find(|t| t.tier == name)
            .map(|t| t.fraction)
            .unwrap_or(0.0)
    };
    if fraction("High") >= 0.5 {
        "most districts are highly vulnerable"
    } else if fraction("High") + fraction("Medium") >= 0.5 {
        "vulnerability is elevated across the city"
    } else {
        "vulnerability is mostly low"
    }
}
