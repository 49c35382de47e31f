use std::collections::HashSet;
use std::io::BufRead;

use crate::districts::loader::builtin_coordinates;
use crate::input::InputError;
use crate::model::district::{Coordinates, DistrictRecord, IncomeLevel};

#[derive(Debug, Clone, Copy)]
struct Columns {
    district: usize,
    lst: usize,
    ndvi: usize,
    elderly: usize,
    income: usize,
    lat: Option<usize>,
    lon: Option<usize>,
}

pub fn parse_district_table<R: BufRead>(mut reader: R) -> Result<Vec<DistrictRecord>, InputError> {
    let mut buf = String::new();
    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse("district table is empty".to_string()));
    }
    let cols = parse_header(buf.trim_start_matches('\u{feff}').trim_end())?;

    let mut records = Vec::new();
    let mut seen = HashSet::new();
    let mut line_no = 1usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let record = parse_row(&fields, &cols, line_no)?;
        if !seen.insert(record.name.clone()) {
            tracing::warn!(
                line = line_no,
                district = %record.name,
                "duplicate district in table; keeping first"
            );
            continue;
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(InputError::Parse(
            "district table has no data rows".to_string(),
        ));
    }
    Ok(records)
}

fn parse_header(line: &str) -> Result<Columns, InputError> {
    let names: Vec<String> = line
        .split('\t')
        .map(|s| s.trim().to_ascii_lowercase())
        .collect();
    let find = |key: &str| names.iter().position(|n| n == key);
    let require = |key: &str| {
        find(key).ok_or_else(|| InputError::InvalidInput(format!("missing column: {key}")))
    };

    let cols = Columns {
        district: require("district")?,
        lst: require("lst_c")?,
        ndvi: require("ndvi_pct")?,
        elderly: require("elderly_pct")?,
        income: require("income")?,
        lat: find("lat"),
        lon: find("lon"),
    };
    if cols.lat.is_some() != cols.lon.is_some() {
        return Err(InputError::InvalidInput(
            "lat and lon columns must be given together".to_string(),
        ));
    }
    Ok(cols)
}

fn parse_row(fields: &[&str], cols: &Columns, line_no: usize) -> Result<DistrictRecord, InputError> {
    let field = |idx: usize, key: &str| {
        fields.get(idx).copied().ok_or_else(|| {
            InputError::Parse(format!("line {line_no}: missing value for {key}"))
        })
    };

    let name = field(cols.district, "district")?;
    if name.is_empty() {
        return Err(InputError::Parse(format!(
            "line {line_no}: empty district name"
        )));
    }

    let income_raw = field(cols.income, "income")?;
    let income_level = income_raw.parse::<IncomeLevel>().inspect_err(|err| {
        tracing::error!(line = line_no, district = name, "{err}");
    })?;

    let coordinates = match (cols.lat, cols.lon) {
        (Some(lat), Some(lon)) => Coordinates::new(
            parse_f64(field(lat, "lat")?, "lat", line_no)?,
            parse_f64(field(lon, "lon")?, "lon", line_no)?,
        ),
        _ => builtin_coordinates(name).ok_or_else(|| {
            InputError::InvalidInput(format!(
                "line {line_no}: no coordinates for district {name:?}; add lat/lon columns"
            ))
        })?,
    };

    Ok(DistrictRecord {
        name: name.to_string(),
        lst_celsius: parse_f64(field(cols.lst, "lst_c")?, "lst_c", line_no)?,
        ndvi_percent: parse_percent(field(cols.ndvi, "ndvi_pct")?, "ndvi_pct", line_no)?,
        elderly_percent: parse_percent(field(cols.elderly, "elderly_pct")?, "elderly_pct", line_no)?,
        income_level,
        coordinates,
    })
}

fn parse_f64(raw: &str, key: &str, line_no: usize) -> Result<f64, InputError> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| InputError::Parse(format!("line {line_no}: invalid {key} value {raw:?}")))?;
    if !value.is_finite() {
        return Err(InputError::Parse(format!(
            "line {line_no}: {key} must be finite, got {raw:?}"
        )));
    }
    Ok(value)
}

fn parse_percent(raw: &str, key: &str, line_no: usize) -> Result<f64, InputError> {
    let value = parse_f64(raw, key, line_no)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(InputError::Parse(format!(
            "line {line_no}: {key} must be in [0,100], got {raw:?}"
        )));
    }
    Ok(value)
}
