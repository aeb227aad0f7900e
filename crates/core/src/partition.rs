//! Static work partitioning for the parallel solve.
//!
//! The id list is cut into contiguous chunks of a fixed stride taken from the
//! front. The last chunk absorbs whatever is left over, so it is the largest
//! chunk whenever the total is not a multiple of the worker count.

use crate::error::CoreError;

/// Default number of workers used by the parallel solve.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Stride used for every chunk but the last: `floor(total / workers)`,
/// never less than one.
///
/// Returns a validation error when `workers` is zero.
pub fn chunk_stride(total: usize, workers: usize) -> Result<usize, CoreError> {
    if workers == 0 {
        return Err(CoreError::Validation(
            "Worker count must be at least 1".to_string(),
        ));
    }
    Ok((total / workers).max(1))
}

/// Split `items` into at most `workers` contiguous, non-empty chunks.
///
/// - The first `n - 1` chunks hold exactly [`chunk_stride`] items.
/// - The final chunk holds the rest.
/// - `n` is `min(items.len(), workers)`, so an empty input yields no chunks.
pub fn partition<T>(items: &[T], workers: usize) -> Result<Vec<&[T]>, CoreError> {
    let stride = chunk_stride(items.len(), workers)?;
    let count = items.len().min(workers);
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut chunks = Vec::with_capacity(count);
    for i in 0..count - 1 {
        chunks.push(&items[i * stride..(i + 1) * stride]);
    }
    chunks.push(&items[(count - 1) * stride..]);
    Ok(chunks)
}

/// Chunk lengths in dispatch order. Handy for logging a plan without
/// holding on to the slices.
pub fn chunk_sizes<T>(chunks: &[&[T]]) -> Vec<usize> {
    chunks.iter().map(|c| c.len()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: i64) -> Vec<i64> {
        (1..=n).collect()
    }

    // -- chunk_stride ---------------------------------------------------------

    #[test]
    fn stride_is_floor_division() {
        assert_eq!(chunk_stride(10, 4).unwrap(), 2);
        assert_eq!(chunk_stride(10_000, 4).unwrap(), 2_500);
        assert_eq!(chunk_stride(11, 3).unwrap(), 3);
    }

    #[test]
    fn stride_never_zero() {
        assert_eq!(chunk_stride(3, 8).unwrap(), 1);
        assert_eq!(chunk_stride(0, 4).unwrap(), 1);
    }

    #[test]
    fn stride_rejects_zero_workers() {
        assert!(matches!(
            chunk_stride(10, 0),
            Err(CoreError::Validation(_))
        ));
    }

    // -- partition ------------------------------------------------------------

    #[test]
    fn ten_ids_four_workers_puts_remainder_last() {
        let all = ids(10);
        let chunks = partition(&all, 4).unwrap();
        assert_eq!(chunk_sizes(&chunks), vec![2, 2, 2, 4]);
        assert_eq!(chunks[3], &[7, 8, 9, 10]);
    }

    #[test]
    fn even_split_has_equal_chunks() {
        let all = ids(12);
        let chunks = partition(&all, 4).unwrap();
        assert_eq!(chunk_sizes(&chunks), vec![3, 3, 3, 3]);
    }

    #[test]
    fn single_worker_gets_everything() {
        let all = ids(7);
        let chunks = partition(&all, 1).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], all.as_slice());
    }

    #[test]
    fn fewer_items_than_workers_gives_singletons() {
        let all = ids(3);
        let chunks = partition(&all, 8).unwrap();
        assert_eq!(chunk_sizes(&chunks), vec![1, 1, 1]);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        let all: Vec<i64> = Vec::new();
        assert!(partition(&all, 4).unwrap().is_empty());
    }

    #[test]
    fn zero_workers_is_rejected() {
        let all = ids(5);
        assert!(matches!(partition(&all, 0), Err(CoreError::Validation(_))));
    }

    #[test]
    fn chunks_cover_every_id_exactly_once() {
        for n in 0..=40 {
            let all = ids(n);
            for workers in 1..=12 {
                let chunks = partition(&all, workers).unwrap();
                assert!(chunks.len() <= workers);
                assert!(chunks.iter().all(|c| !c.is_empty()));

                let flattened: Vec<i64> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
                assert_eq!(flattened, all, "n={n} workers={workers}");
            }
        }
    }
}
