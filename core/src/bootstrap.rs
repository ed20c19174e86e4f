//! # Bootstrap Loading
//!
//! Populates a fresh registry from two comma separated sources: vehicle
//! specifications first, then registration bindings. Both sources start with
//! a header line that is discarded.
//!
//! Loading never fails as a whole. Malformed lines are skipped and an
//! unreadable source contributes nothing; both are recorded in the
//! [`LoadReport`] so the application can decide whether to complain.

use std::io::BufRead;

use rayon::prelude::*;
use rego_common::error::LineError;
use rego_common::source::LineSource;
use rego_common::vehicle::Vehicle;
use tracing::{info, trace, warn};

use crate::bindings::Bindings;
use crate::catalog::VehicleCatalog;

/// Columns in a vehicle specification line.
pub const VEHICLE_FIELDS: usize = 18;
/// Columns in a registration binding line.
pub const BINDING_FIELDS: usize = 2;

const ID: usize = 0;
const MAKE: usize = 13;
const MODEL: usize = 14;
const YEAR: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number; the header is line 1.
    pub line: usize,
    pub reason: LineError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceReport {
    pub source: String,
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
    /// Set when the source could not be opened or broke off mid-stream.
    pub failure: Option<String>,
}

impl SourceReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failure.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub vehicles: SourceReport,
    pub registrations: SourceReport,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.vehicles.is_clean() && self.registrations.is_clean()
    }
}

/// Parses one vehicle specification line.
///
/// Only the id, make, model and year columns are kept; the rest of the
/// eighteen columns just have to be present.
pub fn parse_vehicle(line: &str) -> Result<Vehicle, LineError> {
    let fields = split_fields(line);
    if fields.len() != VEHICLE_FIELDS {
        return Err(LineError::FieldCount {
            expected: VEHICLE_FIELDS,
            found: fields.len(),
        });
    }

    let id = required(fields[ID], "id")?;
    let make = required(fields[MAKE], "make")?;
    let model = required(fields[MODEL], "model")?;
    let year = required(fields[YEAR], "year")?;
    let year: i32 = year
        .parse()
        .map_err(|_| LineError::InvalidYear(year.to_owned()))?;

    Ok(Vehicle::new(id, make, model, year))
}

/// Parses one `registration,vehicle id` line.
pub fn parse_binding(line: &str) -> Result<(String, String), LineError> {
    let fields = split_fields(line);
    if fields.len() != BINDING_FIELDS {
        return Err(LineError::FieldCount {
            expected: BINDING_FIELDS,
            found: fields.len(),
        });
    }

    let registration_id = required(fields[0], "registration")?;
    let vehicle_id = required(fields[1], "vehicle")?;
    Ok((registration_id.to_owned(), vehicle_id.to_owned()))
}

/// Loads vehicles into `catalog`, then bindings into `bindings`.
///
/// Bindings are trusted: they are neither checked against the catalog nor
/// for one-registration-per-vehicle.
pub(crate) fn load(
    vehicles: &dyn LineSource,
    registrations: &dyn LineSource,
    catalog: &VehicleCatalog,
    bindings: &mut Bindings,
) -> LoadReport {
    let vehicles = load_vehicles(vehicles, catalog);
    let registrations = load_bindings(registrations, bindings);
    LoadReport {
        vehicles,
        registrations,
    }
}

fn load_vehicles(source: &dyn LineSource, catalog: &VehicleCatalog) -> SourceReport {
    let name = source.name();
    let (lines, failure) = read_data_lines(source);

    let parsed: Vec<(usize, Result<Vehicle, LineError>)> = lines
        .par_iter()
        .map(|(number, line)| (*number, parse_vehicle(line)))
        .collect();

    let mut vehicles = Vec::with_capacity(parsed.len());
    let mut skipped = Vec::new();
    for (line, result) in parsed {
        match result {
            Ok(vehicle) => vehicles.push(vehicle),
            Err(reason) => skipped.push(SkippedLine { line, reason }),
        }
    }
    let loaded = catalog.load(vehicles);

    finish(name, loaded, skipped, failure)
}

fn load_bindings(source: &dyn LineSource, bindings: &mut Bindings) -> SourceReport {
    let name = source.name();
    let (lines, failure) = read_data_lines(source);

    let mut loaded = 0;
    let mut skipped = Vec::new();
    for (line, text) in lines {
        match parse_binding(&text) {
            Ok((registration_id, vehicle_id)) => {
                bindings.bind(registration_id, vehicle_id);
                loaded += 1;
            }
            Err(reason) => skipped.push(SkippedLine { line, reason }),
        }
    }

    finish(name, loaded, skipped, failure)
}

fn finish(
    source: String,
    loaded: usize,
    skipped: Vec<SkippedLine>,
    failure: Option<String>,
) -> SourceReport {
    for skip in &skipped {
        trace!(source = %source, line = skip.line, reason = %skip.reason, "skipped line");
    }
    info!(
        source = %source,
        loaded,
        skipped = skipped.len(),
        "bootstrap source loaded"
    );

    SourceReport {
        source,
        loaded,
        skipped,
        failure,
    }
}

/// Reads every line after the header, numbered from 2.
///
/// Invalid UTF-8 is replaced rather than rejected. A read error keeps the
/// lines gathered so far and is returned alongside them.
fn read_data_lines(source: &dyn LineSource) -> (Vec<(usize, String)>, Option<String>) {
    let reader = match source.open() {
        Ok(reader) => reader,
        Err(err) => {
            warn!(source = %source.name(), "bootstrap source unreadable: {err:#}");
            return (Vec::new(), Some(format!("{err:#}")));
        }
    };

    let mut lines = Vec::new();
    for (index, chunk) in reader.split(b'\n').enumerate() {
        let mut bytes = match chunk {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(source = %source.name(), line = index + 1, "bootstrap source broke off: {err}");
                return (lines, Some(err.to_string()));
            }
        };
        if index == 0 {
            continue;
        }
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        lines.push((index + 1, String::from_utf8_lossy(&bytes).into_owned()));
    }

    (lines, None)
}

/// Comma split that drops trailing empty fields, so `"a,b,,"` has two.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, LineError> {
    if value.is_empty() {
        Err(LineError::EmptyField(field))
    } else {
        Ok(value)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
