use std::collections::{HashMap, HashSet};

/// Registration id to vehicle id map with a reverse index.
///
/// The reverse index keeps a set per vehicle because bootstrap data is
/// trusted and may bind one vehicle under several registrations. A vehicle
/// counts as registered while its set is non-empty.
#[derive(Debug, Default)]
pub(crate) struct Bindings {
    by_registration: HashMap<String, String>,
    by_vehicle: HashMap<String, HashSet<String>>,
}

impl Bindings {
    pub(crate) fn vehicle_of(&self, registration_id: &str) -> Option<&str> {
        self.by_registration.get(registration_id).map(String::as_str)
    }

    pub(crate) fn is_bound(&self, vehicle_id: &str) -> bool {
        self.by_vehicle
            .get(vehicle_id)
            .is_some_and(|registrations| !registrations.is_empty())
    }

    /// Any live registration for `vehicle_id`. With several (bootstrap only),
    /// the lexicographically smallest one so the answer is stable.
    pub(crate) fn registration_of(&self, vehicle_id: &str) -> Option<&str> {
        self.by_vehicle
            .get(vehicle_id)?
            .iter()
            .min()
            .map(String::as_str)
    }

    pub(crate) fn registrations_of(&self, vehicle_id: &str) -> usize {
        self.by_vehicle.get(vehicle_id).map_or(0, HashSet::len)
    }

    /// Binds without any uniqueness check; an existing binding for
    /// `registration_id` is replaced.
    pub(crate) fn bind(&mut self, registration_id: String, vehicle_id: String) {
        if let Some(previous) = self
            .by_registration
            .insert(registration_id.clone(), vehicle_id.clone())
        {
            self.forget(&previous, &registration_id);
        }
        self.by_vehicle
            .entry(vehicle_id)
            .or_default()
            .insert(registration_id);
    }

    pub(crate) fn unbind(&mut self, registration_id: &str) -> Option<String> {
        let vehicle_id = self.by_registration.remove(registration_id)?;
        self.forget(&vehicle_id, registration_id);
        Some(vehicle_id)
    }

    pub(crate) fn clear(&mut self) {
        self.by_registration.clear();
        self.by_vehicle.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.by_registration.len()
    }

    fn forget(&mut self, vehicle_id: &str, registration_id: &str) {
        if let Some(registrations) = self.by_vehicle.get_mut(vehicle_id) {
            registrations.remove(registration_id);
            if registrations.is_empty() {
                self.by_vehicle.remove(vehicle_id);
            }
        }
    }
}
