use super::*;
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_score_defaults() {
    let cli = Cli::try_parse_from(["urbanheat", "score", "--out", "out"]).unwrap();
    match cli.command {
        Command::Score(args) => {
            assert_eq!(args.out, PathBuf::from("out"));
            assert!(args.districts.is_none());
            assert_eq!(args.mode, ReportMode::District);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_score_tier_mode() {
    let cli = Cli::try_parse_from([
        "urbanheat", "-v", "score", "--out", "out", "--mode", "tier", "--districts", "d.tsv",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 1);
    match cli.command {
        Command::Score(args) => {
            assert_eq!(args.mode, ReportMode::Tier);
            assert_eq!(args.districts, Some(PathBuf::from("d.tsv")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_heatmap_day_range_enforced() {
    assert!(Cli::try_parse_from(["urbanheat", "heatmap", "--out", "o", "--day", "6"]).is_ok());
    assert!(Cli::try_parse_from(["urbanheat", "heatmap", "--out", "o", "--day", "7"]).is_err());
}

#[test]
fn test_parse_plan_strategy() {
    let cli = Cli::try_parse_from([
        "urbanheat",
        "plan",
        "--strategy",
        "green-roofs",
        "--district",
        "Bangsar",
    ])
    .unwrap();
    match cli.command {
        Command::Plan(args) => {
            assert_eq!(args.strategy, Strategy::GreenRoofs);
            assert_eq!(args.district, "Bangsar");
            assert_eq!(args.seed, DEFAULT_SEED);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_alerts_unknown_district_fails() {
    let cli = Cli::try_parse_from(["urbanheat", "alerts", "--district", "Atlantis"]).unwrap();
    assert!(run(cli.command).is_err());
}

#[test]
fn test_load_records_builtin() {
    let (records, source) = load_records(None).unwrap();
    assert_eq!(records.len(), 9);
    assert_eq!(source, "builtin");
}
