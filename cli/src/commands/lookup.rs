use rego_common::config::Config;
use rego_core::Registry;

use crate::terminal::{format, print};

pub fn by_registration(registry: &Registry, registration: &str, cfg: &Config) -> anyhow::Result<()> {
    match registry.get(registration) {
        Some(vehicle) => {
            print::tree_head(0, registration);
            let mut details = format::vehicle_to_details(&vehicle);
            if cfg.quiet > 1 {
                details.truncate(1);
            }
            print::as_tree_one_level(details);
        }
        None => print::failure(&format!("no vehicle is registered as {registration}")),
    }
    Ok(())
}

pub fn by_vehicle(registry: &Registry, vehicle_id: &str, cfg: &Config) -> anyhow::Result<()> {
    let Some(vehicle) = registry.get_by_vehicle_id(vehicle_id) else {
        print::failure(&format!("vehicle {vehicle_id} is not in the catalog"));
        return Ok(());
    };

    let registration = registry.registration_of(vehicle_id);
    print::tree_head(0, &vehicle.to_string());

    let mut details = format::vehicle_to_details(&vehicle);
    if cfg.quiet > 1 {
        details.clear();
    }
    details.push(format::registration_to_detail(registration.as_deref()));
    print::as_tree_one_level(details);
    Ok(())
}
