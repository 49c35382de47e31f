use crate::districts::alerts::{AlertDef, builtin_alerts};
use crate::districts::defs::{DistrictDef, builtin_districts};
use crate::model::district::{Coordinates, DistrictRecord};

pub fn load_builtin_districts() -> Vec<DistrictRecord> {
    builtin_districts().iter().map(to_record).collect()
}

fn to_record(def: &DistrictDef) -> DistrictRecord {
    DistrictRecord {
        name: def.name.to_string(),
        lst_celsius: def.lst_c,
        ndvi_percent: def.ndvi_pct,
        elderly_percent: def.elderly_pct,
        income_level: def.income,
        coordinates: def.coordinates,
    }
}

pub fn builtin_coordinates(name: &str) -> Option<Coordinates> {
    builtin_districts()
        .iter()
        .find(|d| d.name == name)
        .map(|d| d.coordinates)
}

pub fn find_alert(name: &str) -> Option<&'static AlertDef> {
    builtin_alerts().iter().find(|a| a.district == name)
}
