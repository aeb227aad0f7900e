//! Salary allocation as a linear program.
//!
//! One non-negative continuous variable per employee, objective is the sum of
//! all variables, and each variable is capped by that employee's salary. The
//! problem is separable, so the optimum always equals the sum of the caps.

use std::collections::HashMap;

use good_lp::{
    constraint, default_solver, variable, variables, Expression, Solution, SolverModel, Variable,
};

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in [`CoreError::NotFound`] for missing employees.
pub const EMPLOYEE_ENTITY: &str = "employee";

/// Relative tolerance used when comparing objective values.
pub const OBJECTIVE_TOLERANCE: f64 = 1e-6;

/// Check that every capacity is a finite, strictly positive number.
pub fn validate_capacities(capacities: &[f64]) -> Result<(), CoreError> {
    if capacities.is_empty() {
        return Err(CoreError::Validation(
            "Cannot solve an allocation over zero employees".to_string(),
        ));
    }
    if let Some((i, cap)) = capacities
        .iter()
        .enumerate()
        .find(|(_, c)| !c.is_finite() || **c <= 0.0)
    {
        return Err(CoreError::Validation(format!(
            "Capacity at index {i} must be a positive finite number, got {cap}"
        )));
    }
    Ok(())
}

/// Line up capacities with the requested ids.
///
/// `rows` may come back from the store in any order and without duplicates.
/// The output has one capacity per entry of `ids`, in the same order. The
/// first id (in request order) with no row yields [`CoreError::NotFound`].
pub fn align_capacities<I>(ids: &[DbId], rows: I) -> Result<Vec<f64>, CoreError>
where
    I: IntoIterator<Item = (DbId, f64)>,
{
    let by_id: HashMap<DbId, f64> = rows.into_iter().collect();
    ids.iter()
        .map(|id| {
            by_id.get(id).copied().ok_or(CoreError::NotFound {
                entity: EMPLOYEE_ENTITY,
                id: *id,
            })
        })
        .collect()
}

/// Solve `max sum(x_i)` subject to `0 <= x_i <= capacities[i]`.
///
/// Returns the optimal objective value. CPU bound; async callers should run
/// it on the blocking pool.
pub fn max_allocation(capacities: &[f64]) -> Result<f64, CoreError> {
    validate_capacities(capacities)?;

    let mut vars = variables!();
    let xs: Vec<Variable> = capacities
        .iter()
        .map(|_| vars.add(variable().min(0.0)))
        .collect();
    let objective: Expression = xs.iter().copied().sum();

    let mut model = vars.maximise(objective).using(default_solver);
    for (&x, &cap) in xs.iter().zip(capacities) {
        model = model.with(constraint!(x <= cap));
    }

    let solution = model
        .solve()
        .map_err(|e| CoreError::Solver(e.to_string()))?;
    Ok(xs.iter().map(|&x| solution.value(x)).sum())
}

/// Whether two objective values agree within [`OBJECTIVE_TOLERANCE`]
/// (relative to the larger magnitude).
pub fn objectives_match(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= OBJECTIVE_TOLERANCE * scale
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- max_allocation -------------------------------------------------------

    #[test]
    fn three_employees_sum_to_caps() {
        let value = max_allocation(&[100.0, 250.0, 75.5]).unwrap();
        assert!(objectives_match(value, 425.5), "got {value}");
    }

    #[test]
    fn single_employee_saturates_cap() {
        let value = max_allocation(&[4321.25]).unwrap();
        assert!(objectives_match(value, 4321.25), "got {value}");
    }

    #[test]
    fn many_employees_match_plain_sum() {
        let caps: Vec<f64> = (1..=200).map(|i| 1000.0 + i as f64 * 37.125).collect();
        let expected: f64 = caps.iter().sum();
        let value = max_allocation(&caps).unwrap();
        assert!(objectives_match(value, expected), "got {value}, want {expected}");
    }

    #[test]
    #[ignore = "solves the 10000-employee default fixture; run with --release"]
    fn default_fixture_size_matches_plain_sum() {
        let caps: Vec<f64> = (0..10_000)
            .map(|i| 1000.0 + (i * 7919 % 9000) as f64 + 0.25)
            .collect();
        let expected: f64 = caps.iter().sum();

        let start = std::time::Instant::now();
        let value = max_allocation(&caps).unwrap();
        eprintln!("10000 employees solved in {:?}", start.elapsed());

        assert!(objectives_match(value, expected), "got {value}, want {expected}");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(max_allocation(&[]), Err(CoreError::Validation(_))));
    }

    #[test]
    fn non_positive_capacity_is_rejected() {
        assert!(matches!(
            max_allocation(&[10.0, 0.0]),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            max_allocation(&[-5.0]),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn nan_capacity_is_rejected() {
        assert!(matches!(
            max_allocation(&[f64::NAN]),
            Err(CoreError::Validation(_))
        ));
    }

    // -- align_capacities -----------------------------------------------------

    #[test]
    fn align_restores_request_order() {
        let rows = vec![(3, 75.5), (1, 100.0), (2, 250.0)];
        let caps = align_capacities(&[1, 2, 3], rows).unwrap();
        assert_eq!(caps, vec![100.0, 250.0, 75.5]);
    }

    #[test]
    fn align_repeats_duplicate_ids() {
        let caps = align_capacities(&[7, 7], vec![(7, 12.0)]).unwrap();
        assert_eq!(caps, vec![12.0, 12.0]);
    }

    #[test]
    fn align_reports_first_missing_id() {
        let err = align_capacities(&[1, 11, 12], vec![(1, 100.0)]).unwrap_err();
        match err {
            CoreError::NotFound { entity, id } => {
                assert_eq!(entity, EMPLOYEE_ENTITY);
                assert_eq!(id, 11);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    // -- objectives_match -----------------------------------------------------

    #[test]
    fn match_tolerates_rounding() {
        assert!(objectives_match(55_000_000.0, 55_000_000.0 + 1e-3));
        assert!(!objectives_match(100.0, 100.1));
    }
}
