//! Sequential vs. parallel payroll allocation runs.
//!
//! [`solver`] solves one chunk of employees against the store, [`driver`]
//! partitions the full id list and fans chunks out to Tokio tasks.

pub mod config;
pub mod driver;
pub mod error;
pub mod report;
pub mod solver;
pub mod telemetry;
