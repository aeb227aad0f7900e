use payroll_core::types::DbId;
use payroll_db::fixture::{self, FixtureConfig};
use payroll_db::models::employee::CreateEmployee;
use payroll_db::repositories::EmployeeRepo;
use payroll_db::DbPool;
use tempfile::TempDir;

/// A seeded SQLite store in a temporary directory. Keep it alive for the
/// duration of the test; dropping it deletes the file.
pub struct TestStore {
    _dir: TempDir,
    pub url: String,
    pub pool: DbPool,
}

async fn migrated_store() -> TestStore {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("company.db").display());
    let pool = payroll_db::create_pool(&url).await.expect("create pool");
    payroll_db::run_migrations(&pool).await.expect("migrations");
    TestStore {
        _dir: dir,
        url,
        pool,
    }
}

/// Store holding exactly the given `(id, salary)` rows.
#[allow(dead_code)]
pub async fn store_with(salaries: &[(DbId, f64)]) -> TestStore {
    let store = migrated_store().await;
    for &(id, salary) in salaries {
        let input = CreateEmployee {
            id,
            name: format!("Employee {id}"),
            salary,
        };
        EmployeeRepo::insert_if_absent(&store.pool, &input)
            .await
            .expect("insert employee");
    }
    store
}

/// Store seeded by the fixture generator with a fixed RNG seed.
#[allow(dead_code)]
pub async fn seeded_store(count: i64) -> TestStore {
    let store = migrated_store().await;
    let config = FixtureConfig {
        count,
        rng_seed: Some(2024),
        ..FixtureConfig::default()
    };
    fixture::generate(&store.pool, &config)
        .await
        .expect("generate fixture");
    store
}

/// Sum of every salary in the store, computed by SQLite.
#[allow(dead_code)]
pub async fn salary_total(pool: &DbPool) -> f64 {
    sqlx::query_scalar::<_, f64>("SELECT COALESCE(SUM(salary), 0.0) FROM employees")
        .fetch_one(pool)
        .await
        .expect("sum salaries")
}

/// Relative comparison at the tolerance the solver is held to.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    let scale = actual.abs().max(expected.abs()).max(1.0);
    assert!(
        (actual - expected).abs() <= 1e-6 * scale,
        "expected {expected}, got {actual}"
    );
}
