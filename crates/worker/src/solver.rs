//! Single-partition solve: fetch one chunk's salaries, solve its LP.

use payroll_core::allocation;
use payroll_core::error::CoreError;
use payroll_core::types::DbId;
use payroll_db::repositories::EmployeeRepo;
use payroll_db::DbPool;

use crate::error::RunError;

/// Maximum total allocation for `ids` using an existing pool.
///
/// Fails with `NotFound` if any id has no employee row. The LP itself runs
/// on Tokio's blocking pool.
pub async fn solve_chunk(pool: &DbPool, ids: &[DbId]) -> Result<f64, RunError> {
    if ids.is_empty() {
        return Err(CoreError::Validation("Cannot solve an empty chunk".to_string()).into());
    }

    let rows = EmployeeRepo::find_salaries(pool, ids).await?;
    let capacities =
        allocation::align_capacities(ids, rows.into_iter().map(|r| (r.id, r.salary)))?;

    let objective =
        tokio::task::spawn_blocking(move || allocation::max_allocation(&capacities)).await??;
    Ok(objective)
}

/// Same as [`solve_chunk`] but over a private read-only connection that is
/// opened for this call and closed afterwards.
pub async fn solve_isolated(database_url: &str, ids: &[DbId]) -> Result<f64, RunError> {
    let pool = payroll_db::open_read_only(database_url).await?;
    let result = solve_chunk(&pool, ids).await;
    pool.close().await;
    result
}
