use super::*;
use crate::districts::loader::load_builtin_districts;
use crate::pipeline::heatmap::{day_label, heat_layer_for_day};
use crate::pipeline::scoring::score_districts;

fn make_temp_dir(tag: &str) -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("urbanheat_report_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_builtin(dir: &Path, mode: ReportMode) {
    let records = load_builtin_districts();
    let thresholds = ScoringThresholds::default_v1();
    let scored = score_districts(&records, &thresholds).unwrap();
    let input = ReportInput {
        scored: &scored,
        thresholds: &thresholds,
        source: "builtin".to_string(),
        tool_name: "urbanheat".to_string(),
        tool_version: "test".to_string(),
    };
    write_reports(&input, dir, mode).unwrap();
}

#[test]
fn test_district_tsv_header_and_rows() {
    let dir = make_temp_dir("district");
    write_builtin(&dir, ReportMode::District);
    let tsv = std::fs::read_to_string(dir.join("vulnerability.tsv")).unwrap();
    let mut lines = tsv.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("district\tlst_c\tndvi_pct\telderly_pct\tincome"));
    assert_eq!(header.split('\t').count(), 14);

    let first: Vec<&str> = lines.next().unwrap().split('\t').collect();
    assert_eq!(first[0], "Bukit Bintang");
    assert_eq!(first[1], "37.20");
    assert_eq!(&first[5..12], &["2", "2", "1", "2", "7", "High", "red"]);
    assert_eq!(tsv.lines().count(), 10);
}

#[test]
fn test_tier_tsv_counts() {
    let dir = make_temp_dir("tier");
    write_builtin(&dir, ReportMode::Tier);
    let tsv = std::fs::read_to_string(dir.join("vulnerability.tsv")).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines[0], "tier\tn_districts\tfraction\tdistricts");
    assert_eq!(
        lines[1],
        "High\t3\t0.333333\tBukit Bintang,Setapak,Sentul"
    );
    assert!(lines[2].starts_with("Medium\t4\t"));
    assert_eq!(lines[3], "Low\t2\t0.222222\tWangsa Maju,Titiwangsa");
}

#[test]
fn test_summary_json_schema() {
    let dir = make_temp_dir("summary");
    write_builtin(&dir, ReportMode::District);
    let raw = std::fs::read_to_string(dir.join("summary.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["tool"], "urbanheat");
    assert_eq!(v["n_districts"], 9);
    assert_eq!(v["score_median"], 5.0);
    assert_eq!(v["score_max"], 8);
    assert_eq!(v["thresholds"]["heat_high_c"], 36.0);
    assert_eq!(v["tiers"].as_array().unwrap().len(), 3);
    let top = v["top_districts"].as_array().unwrap();
    assert_eq!(top[0]["name"], "Sentul");
    assert_eq!(top[1]["name"], "Bukit Bintang");
    assert_eq!(top[2]["name"], "Setapak");
}

#[test]
fn test_markers_json() {
    let dir = make_temp_dir("markers");
    write_builtin(&dir, ReportMode::District);
    let raw = std::fs::read_to_string(dir.join("markers.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let markers = v.as_array().unwrap();
    assert_eq!(markers.len(), 9);
    assert_eq!(markers[1]["district"], "KLCC");
    assert_eq!(markers[1]["color"], "orange");
    assert_eq!(markers[1]["radius"], 10.0);
    assert_eq!(markers[1]["fill_opacity"], 0.7);
    assert_eq!(markers[1]["position"]["lat"], 3.157);
    assert_eq!(markers[1]["popup"]["income"], "High");
}

#[test]
fn test_report_text_sections() {
    let dir = make_temp_dir("text");
    write_builtin(&dir, ReportMode::District);
    let text = std::fs::read_to_string(dir.join("report.txt")).unwrap();
    assert!(text.contains("Districts scored: 9"));
    assert!(text.contains("High (red): 3"));
    assert!(text.contains("Sentul: score 8 [High]"));
    assert!(text.contains("Heat: LST > 36.0°C -> 2, > 35.0°C -> 1"));
}

#[test]
fn test_deterministic_output() {
    let a = make_temp_dir("det_a");
    let b = make_temp_dir("det_b");
    write_builtin(&a, ReportMode::District);
    write_builtin(&b, ReportMode::District);
    for name in ["vulnerability.tsv", "summary.json", "markers.json", "report.txt"] {
        let x = std::fs::read(a.join(name)).unwrap();
        let y = std::fs::read(b.join(name)).unwrap();
        assert_eq!(x, y, "{name} differs");
    }
}

#[test]
fn test_heatmap_tsv() {
    let dir = make_temp_dir("heatmap");
    let path = dir.join("nested").join("heatmap.tsv");
    let samples = heat_layer_for_day(3, 20, 5);
    write_heatmap_tsv(&samples, &day_label(3), &path).unwrap();
    let tsv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines[0], "day\tlat\tlon\tlst_c\tband\tcolor\tradius");
    assert_eq!(lines.len(), 21);
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[0], "3 days ago");
    }
}
