//! One-shot synthetic payroll fixture.
//!
//! Fills `employees` with ids `1..=count`, made-up names and salaries drawn
//! uniformly from `[salary_min, salary_max)`. Safe to re-run: existing ids are
//! left untouched.

use payroll_core::error::CoreError;
use payroll_core::types::DbId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use validator::Validate;

use crate::models::employee::CreateEmployee;
use crate::repositories::EmployeeRepo;
use crate::DbPool;

pub const DEFAULT_EMPLOYEE_COUNT: i64 = 10_000;
pub const DEFAULT_SALARY_MIN: f64 = 1_000.0;
pub const DEFAULT_SALARY_MAX: f64 = 10_000.0;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Chiara", "Dmitri", "Elena", "Farid", "Grace", "Hiro", "Ines", "Jonas",
    "Kavya", "Liam", "Marta", "Nikolai", "Olga", "Pavel", "Quinn", "Rosa", "Sergei", "Tamara",
    "Umar", "Vera", "Wei", "Yusuf",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Baranova", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hughes",
    "Ivanov", "Jensen", "Kowalski", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov",
    "Rossi", "Sokolova", "Tanaka", "Urquhart", "Volkov", "Walsh", "Yamamoto", "Zhang",
];

/// Errors from [`generate`].
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Shape of the generated fixture.
#[derive(Debug, Clone, Validate)]
pub struct FixtureConfig {
    /// Number of employees, ids `1..=count`.
    #[validate(range(min = 1))]
    pub count: i64,
    /// Inclusive lower salary bound.
    #[validate(range(exclusive_min = 0.0))]
    pub salary_min: f64,
    /// Exclusive upper salary bound.
    pub salary_max: f64,
    /// Fixed RNG seed for reproducible fixtures. `None` draws from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_EMPLOYEE_COUNT,
            salary_min: DEFAULT_SALARY_MIN,
            salary_max: DEFAULT_SALARY_MAX,
            rng_seed: None,
        }
    }
}

impl FixtureConfig {
    /// Field-level validation plus the cross-field salary range check.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        if !self.salary_min.is_finite()
            || !self.salary_max.is_finite()
            || self.salary_min >= self.salary_max
        {
            return Err(CoreError::Validation(format!(
                "Salary range [{}, {}) is empty or not finite",
                self.salary_min, self.salary_max
            )));
        }
        Ok(())
    }
}

/// Build the fixture rows in memory without touching the store.
pub fn synthetic_employees(config: &FixtureConfig) -> Result<Vec<CreateEmployee>, CoreError> {
    config.check()?;

    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let employees = (1..=config.count)
        .map(|id: DbId| {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
            CreateEmployee {
                id,
                name: format!("{first} {last}"),
                salary: rng.random_range(config.salary_min..config.salary_max),
            }
        })
        .collect();
    Ok(employees)
}

/// Insert the fixture in a single transaction.
///
/// Returns how many rows were newly written; a second run over an already
/// seeded store returns 0.
pub async fn generate(pool: &DbPool, config: &FixtureConfig) -> Result<u64, FixtureError> {
    let employees = synthetic_employees(config)?;

    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for employee in &employees {
        inserted += EmployeeRepo::insert_if_absent(&mut *tx, employee).await?;
    }
    tx.commit().await?;

    tracing::info!(
        requested = config.count,
        inserted,
        skipped = employees.len() as u64 - inserted,
        "Fixture generation complete",
    );
    Ok(inserted)
}
