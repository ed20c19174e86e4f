#![cfg(test)]
use std::fs;
use std::path::Path;

use rego_common::config::Config;
use rego_common::error::LineError;
use rego_core::SharedRegistry;
use tempfile::TempDir;

use crate::fixtures::{bundled, regos_csv, spec_line, specs_csv};

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("temp file should be writable");
    path
}

fn config(specs: &Path, regos: &Path) -> Config {
    Config {
        vehicle_specs: specs.to_path_buf(),
        registrations: regos.to_path_buf(),
        quiet: 0,
    }
}

#[test]
fn bundled_data_resolves_known_registration() {
    let cfg = config(&bundled("car_specs.csv"), &bundled("cars_regos.csv"));
    let shared = SharedRegistry::from_config(&cfg);
    let registry = shared.get();

    let car = registry.get("ABC124").expect("ABC124 ships bound");
    assert_eq!(car.id(), "2");
    assert_eq!(car.make(), "Volkswagen");
    assert_eq!(car.model(), "Passat");
    assert_eq!(car.year(), 2012);

    assert!(registry.get("abc").is_none());
    assert!(shared.report().unwrap().is_clean());
}

#[test]
fn bundled_data_has_unbound_vehicles_to_register() {
    let cfg = config(&bundled("car_specs.csv"), &bundled("cars_regos.csv"));
    let shared = SharedRegistry::from_config(&cfg);
    let registry = shared.get();

    assert!(registry.register_existing("kkk123", "5006").is_ok());
    assert_eq!(registry.get("kkk123"), registry.get_by_vehicle_id("5006"));

    assert!(registry.register_existing("NNN123", "5076").is_ok());
    registry.remove("NNN123");
    assert!(registry.get("NNN123").is_none());
    assert!(registry.get_by_vehicle_id("5076").is_some());
}

#[test]
fn malformed_spec_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    let seventeen = "1,sedan,4,5,2000,4,petrol,auto,fwd,white,4700,1800,1450,Kia,Rio,2018,30000".to_string();
    let specs = write(
        &dir,
        "specs.csv",
        &specs_csv(&[
            seventeen,
            spec_line("2", "Volkswagen", "Passat", "2012"),
            spec_line("3", "", "Focus", "2016"),
            spec_line("4", "Mazda", "", "2014"),
            spec_line("5", "Ford", "Ranger", "MMXX"),
        ]),
    );
    let regos = write(&dir, "regos.csv", &regos_csv(&[("ABC124", "2")]));

    let shared = SharedRegistry::from_config(&config(&specs, &regos));
    let registry = shared.get();

    assert_eq!(registry.vehicle_count(), 1);
    assert_eq!(registry.get("ABC124").unwrap().make(), "Volkswagen");
    for skipped in ["1", "3", "4", "5"] {
        assert!(registry.get_by_vehicle_id(skipped).is_none(), "vehicle {skipped} should be skipped");
    }

    let report = &shared.report().unwrap().vehicles;
    let reasons: Vec<(usize, LineError)> = report
        .skipped
        .iter()
        .map(|skip| (skip.line, skip.reason.clone()))
        .collect();
    assert_eq!(
        reasons,
        vec![
            (2, LineError::FieldCount { expected: 18, found: 17 }),
            (4, LineError::EmptyField("make")),
            (5, LineError::EmptyField("model")),
            (6, LineError::InvalidYear("MMXX".into())),
        ]
    );
}

#[test]
fn windows_line_endings_load() {
    let dir = TempDir::new().unwrap();
    let specs = write(
        &dir,
        "specs.csv",
        &specs_csv(&[spec_line("2", "Volkswagen", "Passat", "2012")]).replace('\n', "\r\n"),
    );
    let regos = write(&dir, "regos.csv", &regos_csv(&[("ABC124", "2")]).replace('\n', "\r\n"));

    let shared = SharedRegistry::from_config(&config(&specs, &regos));

    assert_eq!(shared.get().get("ABC124").unwrap().year(), 2012);
    assert!(shared.report().unwrap().is_clean());
}

#[test]
fn missing_registration_file_keeps_the_catalog() {
    let dir = TempDir::new().unwrap();
    let specs = write(
        &dir,
        "specs.csv",
        &specs_csv(&[spec_line("2", "Volkswagen", "Passat", "2012")]),
    );
    let regos = dir.path().join("absent.csv");

    let shared = SharedRegistry::from_config(&config(&specs, &regos));
    let registry = shared.get();

    assert!(registry.get_by_vehicle_id("2").is_some());
    assert_eq!(registry.registration_count(), 0);
    let failure = shared.report().unwrap().registrations.failure.clone().unwrap();
    assert!(failure.contains("absent.csv"), "failure should name the file: {failure}");
}

#[test]
fn bootstrap_bindings_are_not_cross_checked() {
    let dir = TempDir::new().unwrap();
    let specs = write(&dir, "specs.csv", &specs_csv(&[]));
    let regos = write(&dir, "regos.csv", &regos_csv(&[("GHOST1", "404")]));

    let shared = SharedRegistry::from_config(&config(&specs, &regos));
    let registry = shared.get();

    assert_eq!(registry.registration_count(), 1);
    assert!(registry.get("GHOST1").is_none());
    assert!(registry.is_registered("404"));
}
