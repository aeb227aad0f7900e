use std::fmt;
use std::time::Duration;

use payroll_core::allocation::objectives_match;
use payroll_core::types::Timestamp;
use uuid::Uuid;

/// Objective value and wall-clock time of one solve mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeOutcome {
    pub objective: f64,
    pub elapsed: Duration,
}

/// Result of the chunked solve, with per-chunk detail in dispatch order.
#[derive(Debug, Clone)]
pub struct ParallelOutcome {
    pub total: ModeOutcome,
    pub chunk_sizes: Vec<usize>,
    pub chunk_objectives: Vec<f64>,
}

/// Everything a solve run produces.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: Timestamp,
    pub employee_count: usize,
    pub worker_count: usize,
    pub sequential: ModeOutcome,
    pub parallel: ParallelOutcome,
}

impl RunReport {
    /// Sequential and aggregated parallel objectives agree within solver
    /// tolerance.
    pub fn objectives_agree(&self) -> bool {
        objectives_match(self.sequential.objective, self.parallel.total.objective)
    }

    /// Sequential time divided by parallel time. `None` if the parallel run
    /// was too fast to measure.
    pub fn speedup(&self) -> Option<f64> {
        let par = self.parallel.total.elapsed.as_secs_f64();
        (par > 0.0).then(|| self.sequential.elapsed.as_secs_f64() / par)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Optimal objective value (sequential): {}",
            self.sequential.objective
        )?;
        writeln!(
            f,
            "Execution time (sequential): {} seconds",
            self.sequential.elapsed.as_secs_f64()
        )?;
        writeln!(
            f,
            "Optimal objective value (parallel): {}",
            self.parallel.total.objective
        )?;
        writeln!(
            f,
            "Execution time (parallel): {} seconds",
            self.parallel.total.elapsed.as_secs_f64()
        )
    }
}
