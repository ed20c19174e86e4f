use thiserror::Error;

/// Reasons a bootstrap line is discarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("model year `{0}` is not an integer")]
    InvalidYear(String),
}

/// Reasons a registration request is refused.
///
/// A refused request never mutates the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error("registration id is empty")]
    EmptyRegistrationId,

    #[error("vehicle id is empty")]
    EmptyVehicleId,

    #[error("vehicle `{0}` is not in the catalog")]
    UnknownVehicle(String),

    #[error("vehicle `{vehicle_id}` is already registered as `{registration_id}`")]
    AlreadyRegistered {
        vehicle_id: String,
        registration_id: String,
    },
}
