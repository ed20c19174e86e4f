//! # Registration Registry
//!
//! Maps registration ids to vehicle records through two maps: registration
//! id to vehicle id ([`Bindings`]) and vehicle id to record
//! ([`VehicleCatalog`]).
//!
//! ## Invariants
//! * A binding accepted at runtime always points at a cataloged vehicle.
//! * A vehicle has at most one live registration (bootstrap data excepted).
//! * Removing a binding never removes the vehicle record.
//!
//! ## Locking
//! The bindings lock is always taken before the catalog lock. Registration
//! holds the bindings write lock from the uniqueness check through the
//! insert, so two callers racing for the same vehicle cannot both win.

use std::sync::Arc;

use parking_lot::RwLock;
use rego_common::error::RegisterError;
use rego_common::source::LineSource;
use rego_common::vehicle::Vehicle;
use tracing::debug;

use crate::bindings::Bindings;
use crate::bootstrap::{self, LoadReport};
use crate::catalog::VehicleCatalog;

#[derive(Default)]
pub struct Registry {
    catalog: VehicleCatalog,
    bindings: RwLock<Bindings>,
}

impl Registry {
    /// An empty registry with nothing cataloged or bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from vehicle specifications and registration
    /// bindings, in that order.
    ///
    /// Never fails: bad lines and unreadable sources only show up in the
    /// returned [`LoadReport`].
    pub fn bootstrap(
        vehicles: &dyn LineSource,
        registrations: &dyn LineSource,
    ) -> (Self, LoadReport) {
        let catalog = VehicleCatalog::new();
        let mut bindings = Bindings::default();
        let report = bootstrap::load(vehicles, registrations, &catalog, &mut bindings);

        let registry = Self {
            catalog,
            bindings: RwLock::new(bindings),
        };
        (registry, report)
    }

    /// The vehicle currently registered as `registration_id`.
    pub fn get(&self, registration_id: &str) -> Option<Arc<Vehicle>> {
        let bindings = self.bindings.read();
        let vehicle_id = bindings.vehicle_of(registration_id)?;
        self.catalog.get(vehicle_id)
    }

    /// Catalog lookup, registered or not.
    pub fn get_by_vehicle_id(&self, vehicle_id: &str) -> Option<Arc<Vehicle>> {
        self.catalog.get(vehicle_id)
    }

    /// Registers `vehicle` as `registration_id`, cataloging it if it is new.
    ///
    /// When the vehicle id is already cataloged the stored record is kept and
    /// `vehicle` is dropped.
    ///
    /// # Errors
    /// * [`RegisterError::EmptyRegistrationId`] / [`RegisterError::EmptyVehicleId`]
    /// * [`RegisterError::AlreadyRegistered`] - the vehicle has a live binding,
    ///   under this or any other registration id.
    pub fn register(&self, registration_id: &str, vehicle: Vehicle) -> Result<(), RegisterError> {
        let result = self.try_register(registration_id, vehicle);
        log_outcome(registration_id, &result);
        result
    }

    /// Registers a vehicle that is already in the catalog.
    ///
    /// # Errors
    /// As [`Registry::register`], plus [`RegisterError::UnknownVehicle`] when
    /// `vehicle_id` has no record.
    pub fn register_existing(
        &self,
        registration_id: &str,
        vehicle_id: &str,
    ) -> Result<(), RegisterError> {
        let result = self.try_register_existing(registration_id, vehicle_id);
        log_outcome(registration_id, &result);
        result
    }

    /// Drops the binding for `registration_id`, if any. The vehicle record
    /// stays in the catalog.
    pub fn remove(&self, registration_id: &str) {
        if let Some(vehicle_id) = self.bindings.write().unbind(registration_id) {
            debug!(registration_id, vehicle_id = %vehicle_id, "registration removed");
        }
    }

    /// Empties both maps. Nothing is reloaded afterwards.
    pub fn reset(&self) {
        let mut bindings = self.bindings.write();
        bindings.clear();
        self.catalog.clear();
        debug!("registry reset");
    }

    /// The registration id a vehicle is currently bound through.
    pub fn registration_of(&self, vehicle_id: &str) -> Option<String> {
        self.bindings
            .read()
            .registration_of(vehicle_id)
            .map(str::to_owned)
    }

    pub fn is_registered(&self, vehicle_id: &str) -> bool {
        self.bindings.read().is_bound(vehicle_id)
    }

    pub fn registration_count(&self) -> usize {
        self.bindings.read().len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.catalog.len()
    }

    fn try_register(&self, registration_id: &str, vehicle: Vehicle) -> Result<(), RegisterError> {
        validate(registration_id, vehicle.id())?;

        let mut bindings = self.bindings.write();
        ensure_unbound(&bindings, vehicle.id())?;

        let vehicle_id = vehicle.id().to_owned();
        self.catalog.insert_if_absent(vehicle);
        bindings.bind(registration_id.to_owned(), vehicle_id);
        Ok(())
    }

    fn try_register_existing(
        &self,
        registration_id: &str,
        vehicle_id: &str,
    ) -> Result<(), RegisterError> {
        validate(registration_id, vehicle_id)?;

        let mut bindings = self.bindings.write();
        ensure_unbound(&bindings, vehicle_id)?;
        if !self.catalog.contains(vehicle_id) {
            return Err(RegisterError::UnknownVehicle(vehicle_id.to_owned()));
        }

        bindings.bind(registration_id.to_owned(), vehicle_id.to_owned());
        Ok(())
    }
}

fn validate(registration_id: &str, vehicle_id: &str) -> Result<(), RegisterError> {
    if registration_id.is_empty() {
        return Err(RegisterError::EmptyRegistrationId);
    }
    if vehicle_id.is_empty() {
        return Err(RegisterError::EmptyVehicleId);
    }
    Ok(())
}

fn ensure_unbound(bindings: &Bindings, vehicle_id: &str) -> Result<(), RegisterError> {
    match bindings.registration_of(vehicle_id) {
        Some(registration_id) => Err(RegisterError::AlreadyRegistered {
            vehicle_id: vehicle_id.to_owned(),
            registration_id: registration_id.to_owned(),
        }),
        None => Ok(()),
    }
}

fn log_outcome(registration_id: &str, result: &Result<(), RegisterError>) {
    match result {
        Ok(()) => debug!(registration_id, "registration accepted"),
        Err(err) => debug!(registration_id, %err, "registration refused"),
    }
}
