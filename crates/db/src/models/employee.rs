//! Employee entity model and DTOs.

use payroll_core::types::DbId;
use sqlx::FromRow;

/// A full row from the `employees` table.
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub salary: f64,
}

/// The slice of an employee row the solver needs.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct EmployeeSalary {
    pub id: DbId,
    pub salary: f64,
}

/// DTO for inserting an employee with an explicit id.
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub id: DbId,
    pub name: String,
    pub salary: f64,
}
