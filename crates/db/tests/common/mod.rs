use payroll_core::types::DbId;
use payroll_db::models::employee::CreateEmployee;
use payroll_db::repositories::EmployeeRepo;
use payroll_db::DbPool;
use tempfile::TempDir;

/// A migrated SQLite store in a temporary directory.
///
/// The directory is removed when the value is dropped, so keep it alive for
/// the whole test.
pub struct TestStore {
    _dir: TempDir,
    pub url: String,
    pub pool: DbPool,
}

/// Create an empty, migrated store.
pub async fn empty_store() -> TestStore {
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

/// Create a migrated store holding the given `(id, salary)` rows.
#[allow(dead_code)]
pub async fn store_with(salaries: &[(DbId, f64)]) -> TestStore {
    let store = empty_store().await;
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
