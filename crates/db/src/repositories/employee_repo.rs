//! Repository for the `employees` table.

use payroll_core::types::DbId;
use sqlx::{Executor, Sqlite};

use crate::models::employee::{CreateEmployee, Employee, EmployeeSalary};
use crate::DbPool;

/// Column list for `employees` queries.
const COLUMNS: &str = "id, name, salary";

/// SQLite caps bound parameters per statement; stay well under the
/// historical limit of 999.
pub const MAX_IDS_PER_QUERY: usize = 900;

/// Read and insert operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert an employee unless one with the same id already exists.
    ///
    /// Returns the number of rows written (0 or 1).
    pub async fn insert_if_absent<'e, E>(
        executor: E,
        input: &CreateEmployee,
    ) -> Result<u64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            "INSERT INTO employees (id, name, salary) VALUES (?, ?, ?) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(input.id)
        .bind(&input.name)
        .bind(input.salary)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// Find an employee by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = ?");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All employee ids in ascending order.
    pub async fn list_ids(pool: &DbPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM employees ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Number of employees in the store.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
            .fetch_one(pool)
            .await
    }

    /// Fetch `(id, salary)` for the given ids.
    ///
    /// Ids are queried in batches of [`MAX_IDS_PER_QUERY`]. Rows come back in
    /// no particular order, once per distinct id, and ids with no row are
    /// simply absent from the result.
    pub async fn find_salaries(
        pool: &DbPool,
        ids: &[DbId],
    ) -> Result<Vec<EmployeeSalary>, sqlx::Error> {
        let mut rows = Vec::with_capacity(ids.len());
        for batch in ids.chunks(MAX_IDS_PER_QUERY) {
            let placeholders = vec!["?"; batch.len()].join(", ");
            let query = format!("SELECT id, salary FROM employees WHERE id IN ({placeholders})");

            let mut q = sqlx::query_as::<_, EmployeeSalary>(&query);
            for id in batch {
                q = q.bind(*id);
            }
            rows.extend(q.fetch_all(pool).await?);
        }
        Ok(rows)
    }
}
