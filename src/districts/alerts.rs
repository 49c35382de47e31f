use crate::model::district::Coordinates;

/// Canned mobile-alert feed for one district, with its suggested walking route.
#[derive(Debug, Clone, Copy)]
pub struct AlertDef {
    pub district: &'static str,
    pub headline: &'static str,
    pub hotspot: &'static str,
    pub lst_c: f64,
    pub window: Option<&'static str>,
    pub avoid: &'static [&'static str],
    pub suggested_route: &'static [&'static str],
    pub route: &'static [Coordinates],
}

const BUKIT_BINTANG_ROUTE: &[Coordinates] = &[
    Coordinates::new(3.1450, 101.7120),
    Coordinates::new(3.1475, 101.7095),
    Coordinates::new(3.1500, 101.7070),
];
const KLCC_ROUTE: &[Coordinates] = &[
    Coordinates::new(3.1585, 101.7123),
    Coordinates::new(3.1570, 101.7105),
    Coordinates::new(3.1550, 101.7080),
];
const BRICKFIELDS_ROUTE: &[Coordinates] = &[
    Coordinates::new(3.1310, 101.6860),
    Coordinates::new(3.1335, 101.6830),
    Coordinates::new(3.1355, 101.6800),
];
const CHERAS_ROUTE: &[Coordinates] = &[
    Coordinates::new(3.0800, 101.7430),
    Coordinates::new(3.0815, 101.7405),
    Coordinates::new(3.0830, 101.7380),
];

const BUILTIN_ALERTS: &[AlertDef] = &[
    AlertDef {
        district: "Bukit Bintang",
        headline: "High heat warning",
        hotspot: "Jalan Sultan Ismail",
        lst_c: 37.2,
        window: Some("2PM-4PM"),
        avoid: &["Jalan Ampang", "Jalan Pudu"],
        suggested_route: &["Jalan Imbi", "Eco Park", "Pavilion KL"],
        route: BUKIT_BINTANG_ROUTE,
    },
    AlertDef {
        district: "KLCC",
        headline: "Heat risk",
        hotspot: "Persiaran KLCC",
        lst_c: 36.5,
        window: None,
        avoid: &["Jalan Tun Razak"],
        suggested_route: &["Jalan Binjai", "KLCC Park", "Avenue K"],
        route: KLCC_ROUTE,
    },
    AlertDef {
        district: "Brickfields",
        headline: "Heat alert",
        hotspot: "Jalan Tun Sambanthan",
        lst_c: 35.9,
        window: None,
        avoid: &["Jalan Travers"],
        suggested_route: &["Jalan Sultan Abdul Samad", "Lake Garden"],
        route: BRICKFIELDS_ROUTE,
    },
    AlertDef {
        district: "Cheras",
        headline: "Hotspot",
        hotspot: "Taman Connaught",
        lst_c: 35.4,
        window: None,
        avoid: &["Jalan Cheras"],
        suggested_route: &["Jalan Cerdas", "Taman Connaught MRT", "Leisure Mall"],
        route: CHERAS_ROUTE,
    },
];

pub fn builtin_alerts() -> &'static [AlertDef] {
    BUILTIN_ALERTS
}
