//! Persistence - binary grid snapshots

pub mod snapshot;

pub use snapshot::{Header, SnapshotError};
