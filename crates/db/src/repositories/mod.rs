//! Static-method repositories over the connection pool.

pub mod employee_repo;

pub use employee_repo::EmployeeRepo;
