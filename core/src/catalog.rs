use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use parking_lot::RwLock;
use rego_common::vehicle::Vehicle;

/// Vehicle id to record storage.
///
/// Entries outlive registration bindings; the only way to drop one is a full
/// registry reset.
#[derive(Default)]
pub struct VehicleCatalog {
    vehicles: RwLock<HashMap<String, Arc<Vehicle>>>,
}

impl VehicleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, vehicle_id: &str) -> Option<Arc<Vehicle>> {
        self.vehicles.read().get(vehicle_id).cloned()
    }

    pub fn contains(&self, vehicle_id: &str) -> bool {
        self.vehicles.read().contains_key(vehicle_id)
    }

    /// Stores `vehicle` unless its id is already present.
    ///
    /// Returns the record that ends up stored, which is the earlier one when
    /// the id was taken.
    pub fn insert_if_absent(&self, vehicle: Vehicle) -> Arc<Vehicle> {
        let mut vehicles = self.vehicles.write();
        match vehicles.entry(vehicle.id().to_owned()) {
            Entry::Occupied(stored) => Arc::clone(stored.get()),
            Entry::Vacant(slot) => Arc::clone(slot.insert(Arc::new(vehicle))),
        }
    }

    pub fn len(&self) -> usize {
        self.vehicles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.read().is_empty()
    }

    /// Bootstrap population. A repeated id replaces the earlier line.
    pub(crate) fn load(&self, vehicles: impl IntoIterator<Item = Vehicle>) -> usize {
        let mut map = self.vehicles.write();
        let mut count = 0;
        for vehicle in vehicles {
            map.insert(vehicle.id().to_owned(), Arc::new(vehicle));
            count += 1;
        }
        count
    }

    pub(crate) fn clear(&self) {
        self.vehicles.write().clear();
    }
}
