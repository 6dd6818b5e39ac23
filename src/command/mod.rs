//! Administrative command surface
//!
//! Parsing of command text and permission checks belong to the host; this
//! module takes already-resolved arguments.

pub mod admin;

pub use admin::{AdminCommands, CategoryScope, RecordSummary};
