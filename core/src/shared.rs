use std::sync::{Arc, OnceLock};

use rego_common::config::Config;
use rego_common::source::LineSource;
use tracing::info;

use crate::bootstrap::LoadReport;
use crate::registry::Registry;
use crate::sources::FileSource;

struct Bootstrapped {
    registry: Arc<Registry>,
    report: LoadReport,
}

/// The one registry of an application run, bootstrapped on first use.
///
/// Owned by the composition root and handed to consumers by reference.
/// Concurrent first calls to [`SharedRegistry::get`] run the bootstrap once;
/// the others wait and then see the finished instance.
pub struct SharedRegistry<V, R> {
    vehicles: V,
    registrations: R,
    instance: OnceLock<Bootstrapped>,
}

impl<V: LineSource, R: LineSource> SharedRegistry<V, R> {
    pub fn new(vehicles: V, registrations: R) -> Self {
        Self {
            vehicles,
            registrations,
            instance: OnceLock::new(),
        }
    }

    pub fn get(&self) -> &Arc<Registry> {
        &self.bootstrapped().registry
    }

    /// How the bootstrap went, once it has run.
    pub fn report(&self) -> Option<&LoadReport> {
        self.instance.get().map(|bootstrapped| &bootstrapped.report)
    }

    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }

    fn bootstrapped(&self) -> &Bootstrapped {
        self.instance.get_or_init(|| {
            info!(
                vehicles = %self.vehicles.name(),
                registrations = %self.registrations.name(),
                "bootstrapping registry"
            );
            let (registry, report) = Registry::bootstrap(&self.vehicles, &self.registrations);
            Bootstrapped {
                registry: Arc::new(registry),
                report,
            }
        })
    }
}

impl SharedRegistry<FileSource, FileSource> {
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            FileSource::new(&cfg.vehicle_specs),
            FileSource::new(&cfg.registrations),
        )
    }
}
