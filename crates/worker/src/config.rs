use std::fmt::Display;
use std::str::FromStr;

use payroll_core::error::CoreError;
use payroll_core::partition::DEFAULT_WORKER_COUNT;
use payroll_db::fixture::{
    FixtureConfig, DEFAULT_EMPLOYEE_COUNT, DEFAULT_SALARY_MAX, DEFAULT_SALARY_MIN,
};
use validator::Validate;

/// Store location used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://company.db";

/// Solve-run configuration loaded from environment variables.
///
/// | Env Var        | Default               |
/// |----------------|-----------------------|
/// | `DATABASE_URL` | `sqlite://company.db` |
/// | `WORKER_COUNT` | `4`                   |
#[derive(Debug, Clone, Validate)]
pub struct SolveConfig {
    #[validate(length(min = 1))]
    pub database_url: String,
    /// Number of parallel workers, also the maximum number of chunks.
    #[validate(range(min = 1, max = 256))]
    pub worker_count: usize,
}

impl SolveConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` is this over the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            worker_count: parse_or(&lookup, "WORKER_COUNT", DEFAULT_WORKER_COUNT)?,
        };
        config
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(config)
    }
}

/// Seed-run configuration loaded from environment variables.
///
/// | Env Var          | Default               |
/// |------------------|-----------------------|
/// | `DATABASE_URL`   | `sqlite://company.db` |
/// | `EMPLOYEE_COUNT` | `10000`               |
/// | `SALARY_MIN`     | `1000`                |
/// | `SALARY_MAX`     | `10000`               |
/// | `SEED_RNG`       | unset (OS entropy)    |
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub database_url: String,
    pub fixture: FixtureConfig,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rng_seed = match lookup("SEED_RNG") {
            Some(raw) => Some(parse_value::<u64>("SEED_RNG", &raw)?),
            None => None,
        };
        let fixture = FixtureConfig {
            count: parse_or(&lookup, "EMPLOYEE_COUNT", DEFAULT_EMPLOYEE_COUNT)?,
            salary_min: parse_or(&lookup, "SALARY_MIN", DEFAULT_SALARY_MIN)?,
            salary_max: parse_or(&lookup, "SALARY_MAX", DEFAULT_SALARY_MAX)?,
            rng_seed,
        };
        fixture.check()?;

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            fixture,
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, CoreError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, CoreError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| CoreError::Validation(format!("{key} is invalid ({raw:?}): {e}")))
}
