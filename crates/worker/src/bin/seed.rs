//! `payroll-seed` -- one-shot fixture loader for the payroll store.
//!
//! Creates the SQLite file if needed, applies migrations and inserts the
//! synthetic employees. Re-running leaves existing rows alone.
//!
//! See [`payroll_worker::config::SeedConfig`] for the environment variables.

use payroll_db::fixture;
use payroll_db::repositories::EmployeeRepo;
use payroll_worker::config::SeedConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    payroll_worker::telemetry::init("payroll_seed=info,payroll_db=info");

    let config = SeedConfig::from_env()?;

    let pool = payroll_db::create_pool(&config.database_url).await?;
    tracing::info!(database_url = %config.database_url, "Database connection pool created");

    payroll_db::health_check(&pool).await?;
    payroll_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    let inserted = fixture::generate(&pool, &config.fixture).await?;
    let total = EmployeeRepo::count(&pool).await?;
    pool.close().await;

    println!("Inserted {inserted} employees ({total} total)");
    Ok(())
}
