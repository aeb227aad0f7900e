//! Pure domain logic for the payroll allocation workspace.
//!
//! Nothing in here touches the store or the async runtime, so the `db` and
//! `worker` crates can both depend on it.

pub mod allocation;
pub mod error;
pub mod partition;
pub mod types;
