//! # Registration Registry
//!
//! In-memory directory mapping registration ids to vehicle records.
//!
//! * [`catalog`]: vehicle id to record storage.
//! * [`registry`]: the registration map layered on top of the catalog.
//! * [`bootstrap`]: loading both maps from tabular sources.
//! * [`shared`]: the once-initialized instance owned by the application.
//! * [`sources`]: file and in-memory [`LineSource`](rego_common::source::LineSource) adapters.

mod bindings;

pub mod bootstrap;
pub mod catalog;
pub mod registry;
pub mod shared;
pub mod sources;

pub use bootstrap::{LoadReport, SkippedLine, SourceReport};
pub use registry::Registry;
pub use shared::SharedRegistry;
