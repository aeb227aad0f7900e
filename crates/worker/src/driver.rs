//! Partition driver: one sequential baseline, then the same ids fanned out
//! to a fixed set of workers and summed.
//!
//! Each worker is a Tokio task with its own read-only store connection.
//! Workers share nothing and never talk to each other; the only coordination
//! is joining them and adding up their objectives.

use std::time::Instant;

use payroll_core::error::CoreError;
use payroll_core::partition;
use payroll_core::types::DbId;
use payroll_db::repositories::EmployeeRepo;
use tokio::task::JoinSet;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::SolveConfig;
use crate::error::RunError;
use crate::report::{ModeOutcome, ParallelOutcome, RunReport};
use crate::solver::solve_isolated;

/// Runs the sequential and chunked solves against one store.
#[derive(Debug, Clone)]
pub struct PartitionDriver {
    database_url: String,
    worker_count: usize,
}

impl PartitionDriver {
    pub fn new(database_url: impl Into<String>, worker_count: usize) -> Self {
        Self {
            database_url: database_url.into(),
            worker_count,
        }
    }

    pub fn from_config(config: &SolveConfig) -> Self {
        Self::new(config.database_url.clone(), config.worker_count)
    }

    /// All employee ids in the store, ascending.
    pub async fn load_ids(&self) -> Result<Vec<DbId>, RunError> {
        let pool = payroll_db::open_read_only(&self.database_url).await?;
        let ids = EmployeeRepo::list_ids(&pool).await;
        pool.close().await;
        Ok(ids?)
    }

    /// Load every id from the store and run both modes over them.
    pub async fn run(&self) -> Result<RunReport, RunError> {
        let ids = self.load_ids().await?;
        tracing::info!(employees = ids.len(), "Loaded employee ids");
        self.run_ids(&ids).await
    }

    /// Run both modes over `ids`: the sequential baseline first, then the
    /// chunked run. Any failure aborts the whole run.
    pub async fn run_ids(&self, ids: &[DbId]) -> Result<RunReport, RunError> {
        let run_id = Uuid::now_v7();
        let started_at = chrono::Utc::now();
        let span = tracing::info_span!("solve_run", %run_id, workers = self.worker_count);

        async {
            let sequential = self.run_sequential(ids).await?;
            let parallel = self.run_parallel(ids).await?;

            let report = RunReport {
                run_id,
                started_at,
                employee_count: ids.len(),
                worker_count: self.worker_count,
                sequential,
                parallel,
            };
            if !report.objectives_agree() {
                tracing::warn!(
                    sequential = report.sequential.objective,
                    parallel = report.parallel.total.objective,
                    "Sequential and parallel objectives differ beyond tolerance",
                );
            }
            Ok::<_, RunError>(report)
        }
        .instrument(span)
        .await
    }

    /// Solve the whole id list as a single LP.
    pub async fn run_sequential(&self, ids: &[DbId]) -> Result<ModeOutcome, RunError> {
        let start = Instant::now();
        let objective = solve_isolated(&self.database_url, ids).await?;
        let elapsed = start.elapsed();

        tracing::info!(
            employees = ids.len(),
            objective,
            elapsed_ms = elapsed.as_millis() as u64,
            "Sequential solve finished",
        );
        Ok(ModeOutcome { objective, elapsed })
    }

    /// Partition `ids`, solve every chunk on its own task and sum the results
    /// in chunk order.
    pub async fn run_parallel(&self, ids: &[DbId]) -> Result<ParallelOutcome, RunError> {
        let chunks = partition::partition(ids, self.worker_count)?;
        if chunks.is_empty() {
            return Err(CoreError::Validation("No employees to solve".to_string()).into());
        }
        let chunk_sizes = partition::chunk_sizes(&chunks);
        tracing::info!(chunks = chunks.len(), ?chunk_sizes, "Dispatching chunks");

        let start = Instant::now();
        let mut workers = JoinSet::new();
        for (index, chunk) in chunks.into_iter().enumerate() {
            let database_url = self.database_url.clone();
            let chunk = chunk.to_vec();
            workers.spawn(async move {
                let objective = solve_isolated(&database_url, &chunk).await?;
                tracing::debug!(chunk = index, size = chunk.len(), objective, "Chunk solved");
                Ok::<_, RunError>((index, objective))
            });
        }

        // Returning early drops the set, which aborts every worker still running.
        let mut chunk_objectives = vec![0.0; chunk_sizes.len()];
        while let Some(joined) = workers.join_next().await {
            let (index, objective) = joined??;
            chunk_objectives[index] = objective;
        }
        let elapsed = start.elapsed();
        let objective: f64 = chunk_objectives.iter().sum();

        tracing::info!(
            employees = ids.len(),
            objective,
            elapsed_ms = elapsed.as_millis() as u64,
            "Parallel solve finished",
        );
        Ok(ParallelOutcome {
            total: ModeOutcome { objective, elapsed },
            chunk_sizes,
            chunk_objectives,
        })
    }
}
