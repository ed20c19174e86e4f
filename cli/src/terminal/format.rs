use colored::*;
use rego_common::vehicle::Vehicle;
use rego_core::SourceReport;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn vehicle_to_details(vehicle: &Vehicle) -> Vec<Detail> {
    vec![
        ("Vehicle".to_string(), vehicle.id().color(colors::ACCENT)),
        ("Make".to_string(), vehicle.make().normal()),
        ("Model".to_string(), vehicle.model().normal()),
        ("Year".to_string(), vehicle.year().to_string().normal()),
    ]
}

pub fn registration_to_detail(registration: Option<&str>) -> Detail {
    let value = match registration {
        Some(registration) => registration.color(colors::PRIMARY).bold(),
        None => "unregistered".dimmed(),
    };
    ("Rego".to_string(), value)
}

pub fn source_to_details(report: &SourceReport) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Loaded".to_string(), report.loaded.to_string().green().bold()),
        ("Skipped".to_string(), skipped_value(report.skipped_count())),
    ];
    if let Some(failure) = &report.failure {
        details.push(("Failure".to_string(), failure.color(colors::FAILURE)));
    }
    details
}

fn skipped_value(count: usize) -> ColoredString {
    match count {
        0 => "0".normal(),
        n => n.to_string().yellow().bold(),
    }
}
