use geo::{Distance, Geodesic, Point};
use serde::Serialize;
use thiserror::Error;

use crate::districts::alerts::AlertDef;
use crate::districts::loader::find_alert;
use crate::model::district::Coordinates;
use crate::pipeline::heatmap::{CITY_BOUNDS, LstSample, sample_lst};

pub const ALERT_MARKERS: usize = 15;
pub const WALK_MINUTES_PER_KM: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    #[error("no alert feed for district {0:?}")]
    UnknownDistrict(String),
}

#[derive(Debug, Clone, Copy)]
pub struct AlertOptions {
    pub show_route: bool,
    pub show_alerts: bool,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub waypoints: Vec<Coordinates>,
    pub distance_km: f64,
    pub eta_minutes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertFeed {
    pub district: &'static str,
    pub headline: &'static str,
    pub hotspot: &'static str,
    pub lst_c: f64,
    pub window: Option<&'static str>,
    pub avoid: Vec<&'static str>,
    pub suggested_route: Vec<&'static str>,
    pub route: Option<RouteSummary>,
    pub markers: Vec<LstSample>,
}

pub fn lookup_alert(district: &str) -> Result<&'static AlertDef, AlertError> {
    find_alert(district).ok_or_else(|| AlertError::UnknownDistrict(district.to_string()))
}

/// WGS-84 geodesic distance between two waypoints.
pub fn leg_distance_km(a: Coordinates, b: Coordinates) -> f64 {
    Geodesic.distance(Point::new(a.lon, a.lat), Point::new(b.lon, b.lat)) / 1000.0
}

pub fn route_distance_km(route: &[Coordinates]) -> f64 {
    route.windows(2).map(|w| leg_distance_km(w[0], w[1])).sum()
}

pub fn walking_eta_minutes(distance_km: f64) -> u32 {
    (distance_km * WALK_MINUTES_PER_KM).floor() as u32
}

pub fn summarize_route(route: &[Coordinates]) -> RouteSummary {
    let distance_km = route_distance_km(route);
    RouteSummary {
        waypoints: route.to_vec(),
        distance_km,
        eta_minutes: walking_eta_minutes(distance_km),
    }
}

pub fn build_alert_feed(district: &str, opts: &AlertOptions) -> Result<AlertFeed, AlertError> {
    let def = lookup_alert(district)?;

    let route = opts.show_route.then(|| summarize_route(def.route));
    if let Some(r) = &route {
        tracing::info!(
            district = def.district,
            distance_km = r.distance_km,
            eta_minutes = r.eta_minutes,
            "suggested route"
        );
    }

    let markers = if opts.show_alerts {
        sample_lst(&CITY_BOUNDS, ALERT_MARKERS, opts.seed, def.district)
    } else {
        Vec::new()
    };

    Ok(AlertFeed {
        district: def.district,
        headline: def.headline,
        hotspot: def.hotspot,
        lst_c: def.lst_c,
        window: def.window,
        avoid: def.avoid.to_vec(),
        suggested_route: def.suggested_route.to_vec(),
        route,
        markers,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/alerts.rs"]
mod tests;
