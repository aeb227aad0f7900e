//! `payroll-worker` -- solve the payroll allocation LP twice and compare.
//!
//! Reads every employee from the store, solves the whole set as one LP, then
//! solves it again split across `WORKER_COUNT` workers. Prints the objective
//! and elapsed time of each mode. Takes no flags; run `payroll-seed` first.
//!
//! # Environment variables
//!
//! | Variable       | Default               | Description                 |
//! |----------------|-----------------------|-----------------------------|
//! | `DATABASE_URL` | `sqlite://company.db` | Seeded SQLite store         |
//! | `WORKER_COUNT` | `4`                   | Number of parallel workers  |
//! | `LOG_FORMAT`   | `text`                | `json` for JSON log lines   |

use payroll_worker::config::SolveConfig;
use payroll_worker::driver::PartitionDriver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    payroll_worker::telemetry::init("payroll_worker=info");

    let config = SolveConfig::from_env()?;
    tracing::info!(
        database_url = %config.database_url,
        worker_count = config.worker_count,
        "Starting payroll solve",
    );

    let driver = PartitionDriver::from_config(&config);
    let report = driver
        .run()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Solve run failed"))?;

    print!("{report}");

    tracing::info!(
        run_id = %report.run_id,
        employees = report.employee_count,
        chunks = report.parallel.chunk_sizes.len(),
        speedup = report.speedup(),
        objectives_agree = report.objectives_agree(),
        "Solve run complete",
    );
    Ok(())
}
