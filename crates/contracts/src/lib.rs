//! Wire contracts for the hotel administration API.
//!
//! Plain-data crate shared by the frontend: record structs matching the
//! backend's JSON field names bit-exact, form drafts with submit-time
//! coercion, and the generic resource traits the CRUD engine is built on.
//! No UI dependencies; everything here is testable on the host target.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
