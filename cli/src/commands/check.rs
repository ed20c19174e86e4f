use colored::*;
use rego_core::Registry;

use crate::terminal::{colors, print};

/// Tries the binding against this run's registry. Nothing is persisted, so
/// the answer only says whether the data as loaded would accept it.
pub fn check(registry: &Registry, registration: &str, vehicle_id: &str) -> anyhow::Result<()> {
    match registry.register_existing(registration, vehicle_id) {
        Ok(()) => print::print_status(format!(
            "{} can be registered as {}",
            vehicle_id.color(colors::ACCENT),
            registration.color(colors::PRIMARY).bold()
        )),
        Err(err) => print::failure(&format!("refused: {err}")),
    }
    Ok(())
}
