use super::*;

#[test]
fn test_heat_band_edges() {
    assert_eq!(HeatBand::from_celsius(30.0), HeatBand::Cool);
    assert_eq!(HeatBand::from_celsius(31.0), HeatBand::Cool);
    assert_eq!(HeatBand::from_celsius(31.01), HeatBand::Warm);
    assert_eq!(HeatBand::from_celsius(34.0), HeatBand::Warm);
    assert_eq!(HeatBand::from_celsius(37.0), HeatBand::Hot);
    assert_eq!(HeatBand::from_celsius(37.01), HeatBand::Extreme);
}

#[test]
fn test_heat_band_colors() {
    assert_eq!(HeatBand::Cool.color(), "#7FFFD4");
    assert_eq!(HeatBand::Warm.color(), "#FFD700");
    assert_eq!(HeatBand::Hot.color(), "#FF8C00");
    assert_eq!(HeatBand::Extreme.color(), "#FF0000");
}

#[test]
fn test_marker_radius_scales_with_temperature() {
    let cool = LstSample {
        position: Coordinates::new(3.15, 101.7),
        lst_c: 30.0,
    };
    let hot = LstSample {
        position: Coordinates::new(3.15, 101.7),
        lst_c: 40.0,
    };
    assert_eq!(cool.marker_radius(), 4.0);
    assert_eq!(hot.marker_radius(), 9.0);
}

#[test]
fn test_samples_inside_bounds() {
    let samples = heat_layer_for_day(0, 500, 42);
    assert_eq!(samples.len(), 500);
    for s in &samples {
        assert!(s.position.lat >= CITY_BOUNDS.lat_min && s.position.lat < CITY_BOUNDS.lat_max);
        assert!(s.position.lon >= CITY_BOUNDS.lon_min && s.position.lon < CITY_BOUNDS.lon_max);
        assert!(s.lst_c >= LST_MIN_C && s.lst_c < LST_MAX_C);
    }
}

#[test]
fn test_same_day_same_layer() {
    let a = heat_layer_for_day(3, DEFAULT_SAMPLES, 7);
    let b = heat_layer_for_day(3, DEFAULT_SAMPLES, 7);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.lst_c, y.lst_c);
        assert_eq!(x.position, y.position);
    }
}

#[test]
fn test_different_days_differ() {
    let a = heat_layer_for_day(0, DEFAULT_SAMPLES, 7);
    let b = heat_layer_for_day(1, DEFAULT_SAMPLES, 7);
    assert!(a.iter().zip(b.iter()).any(|(x, y)| x.lst_c != y.lst_c));
}

#[test]
fn test_day_labels() {
    assert_eq!(day_label(0), "today");
    assert_eq!(day_label(1), "1 day ago");
    assert_eq!(day_label(6), "6 days ago");
}
