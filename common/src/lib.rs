//! Shared types for the registration registry.
//!
//! * [`vehicle`]: the immutable vehicle record.
//! * [`source`]: the port the bootstrap loader reads data through.
//! * [`error`]: typed failures surfaced by loading and registration.
//! * [`config`]: runtime settings filled in by the command line.

pub mod config;
pub mod error;
pub mod source;
pub mod vehicle;
