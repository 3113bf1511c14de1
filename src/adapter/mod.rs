//! Headless host integration: JSON wire format for events and snapshots

pub mod protocol;
