use super::*;

#[test]
fn test_series_shape_and_ranges() {
    let s = simulate_mitigation(Strategy::TreePlanting, "Bukit Bintang", 3);
    assert_eq!(s.before_c.len(), SERIES_LEN);
    assert_eq!(s.after_c.len(), SERIES_LEN);
    assert!(s.before_c.iter().all(|&v| (32.0..36.0).contains(&v)));
    assert!(s.after_c.iter().all(|&v| (28.0..31.0).contains(&v)));
    assert!(s.mean_reduction_c > 1.0 && s.mean_reduction_c < 8.0);
    assert_eq!(s.strategy, "Tree Planting");
}

#[test]
fn test_same_selection_same_series() {
    let a = simulate_mitigation(Strategy::GreenRoofs, "Setapak", 9);
    let b = simulate_mitigation(Strategy::GreenRoofs, "Setapak", 9);
    assert_eq!(a.before_c, b.before_c);
    assert_eq!(a.after_c, b.after_c);
}

#[test]
fn test_selection_changes_series() {
    let a = simulate_mitigation(Strategy::GreenRoofs, "Setapak", 9);
    let b = simulate_mitigation(Strategy::CoolPavement, "Setapak", 9);
    let c = simulate_mitigation(Strategy::GreenRoofs, "Bangsar", 9);
    assert_ne!(a.before_c, b.before_c);
    assert_ne!(a.before_c, c.before_c);
}

#[test]
fn test_strategy_labels() {
    assert_eq!(Strategy::GreenRoofs.label(), "Green Roofs");
    assert_eq!(Strategy::CoolPavement.label(), "Cool Pavement");
}
