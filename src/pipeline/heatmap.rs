//! Mock land-surface-temperature layer for the heat-risk map.

use rand::Rng;
use serde::Serialize;

use crate::model::district::Coordinates;
use crate::pipeline::seed::selection_rng;

pub const DEFAULT_SAMPLES: usize = 50;
pub const DAYS_AVAILABLE: u8 = 7;

#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

/// Central Kuala Lumpur.
pub const CITY_BOUNDS: BoundingBox = BoundingBox {
    lat_min: 3.13,
    lat_max: 3.17,
    lon_min: 101.68,
    lon_max: 101.73,
};

pub const LST_MIN_C: f64 = 30.0;
pub const LST_MAX_C: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeatBand {
    Cool,
    Warm,
    Hot,
    Extreme,
}

impl HeatBand {
    pub fn from_celsius(lst_c: f64) -> Self {
        if lst_c <= 31.0 {
            HeatBand::Cool
        } else if lst_c <= 34.0 {
            HeatBand::Warm
        } else if lst_c <= 37.0 {
            HeatBand::Hot
        } else {
            HeatBand::Extreme
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HeatBand::Cool => "cool",
            HeatBand::Warm => "warm",
            HeatBand::Hot => "hot",
            HeatBand::Extreme => "extreme",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            HeatBand::Cool => "#7FFFD4",
            HeatBand::Warm => "#FFD700",
            HeatBand::Hot => "#FF8C00",
            HeatBand::Extreme => "#FF0000",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LstSample {
    pub position: Coordinates,
    pub lst_c: f64,
}

impl LstSample {
    pub fn band(&self) -> HeatBand {
        HeatBand::from_celsius(self.lst_c)
    }

    /// Hotter samples draw larger markers.
    pub fn marker_radius(&self) -> f64 {
        4.0 + (self.lst_c - LST_MIN_C) / 2.0
    }
}

pub fn day_label(day: u8) -> String {
    match day {
        0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        n => format!("{n} days ago"),
    }
}

/// Draw `n` samples uniformly inside `bounds`. The stream depends only on
/// `seed` and `key`, so re-selecting the same day yields the same layer.
pub fn sample_lst(bounds: &BoundingBox, n: usize, seed: u64, key: &str) -> Vec<LstSample> {
    let mut rng = selection_rng(seed, &["lst", key]);
    (0..n)
        .map(|_| {
            let lat = rng.gen_range(bounds.lat_min..bounds.lat_max);
            let lon = rng.gen_range(bounds.lon_min..bounds.lon_max);
            let lst_c = rng.gen_range(LST_MIN_C..LST_MAX_C);
            LstSample {
                position: Coordinates::new(lat, lon),
                lst_c,
            }
        })
        .collect()
}

pub fn heat_layer_for_day(day: u8, n: usize, seed: u64) -> Vec<LstSample> {
    sample_lst(&CITY_BOUNDS, n, seed, &format!("day-{day}"))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/heatmap.rs"]
mod tests;
