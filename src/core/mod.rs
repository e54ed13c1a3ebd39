pub mod migrate;
pub mod registry;
pub mod steps;

pub use migrate::{AppliedStep, MigrationOutcome, migrate};
pub use registry::{Registry, Step};
