//! Row structs and DTOs for the store's tables.

pub mod employee;
