use crate::model::district::{Coordinates, IncomeLevel};

#[derive(Debug, Clone, Copy)]
pub struct DistrictDef {
    pub name: &'static str,
    pub lst_c: f64,
    pub ndvi_pct: f64,
    pub elderly_pct: f64,
    pub income: IncomeLevel,
    pub coordinates: Coordinates,
}

// Kuala Lumpur reference districts.
const BUILTIN_DISTRICTS: &[DistrictDef] = &[
    DistrictDef {
        name: "Bukit Bintang",
        lst_c: 37.2,
        ndvi_pct: 12.5,
        elderly_pct: 12.3,
        income: IncomeLevel::Low,
        coordinates: Coordinates::new(3.145, 101.710),
    },
    DistrictDef {
        name: "KLCC",
        lst_c: 36.5,
        ndvi_pct: 18.3,
        elderly_pct: 9.8,
        income: IncomeLevel::High,
        coordinates: Coordinates::new(3.157, 101.712),
    },
    DistrictDef {
        name: "Brickfields",
        lst_c: 35.9,
        ndvi_pct: 22.4,
        elderly_pct: 11.5,
        income: IncomeLevel::Medium,
        coordinates: Coordinates::new(3.129, 101.685),
    },
    DistrictDef {
        name: "Cheras",
        lst_c: 35.4,
        ndvi_pct: 28.7,
        elderly_pct: 13.2,
        income: IncomeLevel::Low,
        coordinates: Coordinates::new(3.078, 101.740),
    },
    DistrictDef {
        name: "Setapak",
        lst_c: 36.1,
        ndvi_pct: 19.1,
        elderly_pct: 10.6,
        income: IncomeLevel::Medium,
        coordinates: Coordinates::new(3.194, 101.714),
    },
    DistrictDef {
        name: "Sentul",
        lst_c: 36.8,
        ndvi_pct: 15.5,
        elderly_pct: 14.1,
        income: IncomeLevel::Low,
        coordinates: Coordinates::new(3.179, 101.696),
    },
    DistrictDef {
        name: "Wangsa Maju",
        lst_c: 35.7,
        ndvi_pct: 25.2,
        elderly_pct: 12.0,
        income: IncomeLevel::High,
        coordinates: Coordinates::new(3.210, 101.740),
    },
    DistrictDef {
        name: "Seputeh",
        lst_c: 36.0,
        ndvi_pct: 20.0,
        elderly_pct: 13.5,
        income: IncomeLevel::Medium,
        coordinates: Coordinates::new(3.120, 101.692),
    },
    DistrictDef {
        name: "Titiwangsa",
        lst_c: 35.3,
        ndvi_pct: 23.3,
        elderly_pct: 9.5,
        income: IncomeLevel::High,
        coordinates: Coordinates::new(3.172, 101.706),
    },
];

pub fn builtin_districts() -> &'static [DistrictDef] {
    BUILTIN_DISTRICTS
}
