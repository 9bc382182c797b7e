/// Result of merging one candidate batch into the window.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// Window contents before this update.
    pub prev_state: Vec<i64>,
    /// Candidates actually admitted, in their original relative order.
    pub admitted: Vec<i64>,
    /// Window contents after this update.
    pub curr_state: Vec<i64>,
    /// Arithmetic mean of `curr_state`, full precision. 0.0 for an empty window.
    pub average: f64,
}

/// Merges a candidate batch into a window snapshot.
///
/// A candidate is admitted iff it is absent from `previous`. Dedup is only
/// against the previous state: a value repeated inside `candidates` that the
/// window has not seen is admitted once per occurrence (the first ten
/// Fibonacci numbers land with both 1s). Admitted values are appended in
/// arrival order and the oldest elements are evicted when the combined
/// sequence exceeds `capacity`.
pub fn merge(previous: &[i64], candidates: &[i64], capacity: usize) -> MergeOutcome {
    let prev_state = previous.to_vec();

    let admitted: Vec<i64> = candidates
        .iter()
        .copied()
        .filter(|c| !prev_state.contains(c))
        .collect();

    let mut combined = prev_state.clone();
    combined.extend_from_slice(&admitted);

    // Keep the newest `capacity` elements; everything older falls off the front.
    let start = combined.len().saturating_sub(capacity);
    let curr_state: Vec<i64> = combined[start..].to_vec();

    let average = if curr_state.is_empty() {
        0.0
    } else {
        curr_state.iter().sum::<i64>() as f64 / curr_state.len() as f64
    };

    MergeOutcome {
        prev_state,
        admitted,
        curr_state,
        average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_only_unseen_values() {
        let outcome = merge(&[1, 2, 3], &[2, 4, 3, 5], 10);
        assert_eq!(outcome.admitted, vec![4, 5]);
        assert_eq!(outcome.curr_state, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn evicts_oldest_when_over_capacity() {
        let outcome = merge(&[1, 2, 3], &[4, 5], 4);
        assert_eq!(outcome.prev_state, vec![1, 2, 3]);
        assert_eq!(outcome.curr_state, vec![2, 3, 4, 5]);
    }

    #[test]
    fn intra_batch_duplicates_are_kept() {
        // Dedup applies against the previous window only, not within a batch.
        let outcome = merge(&[], &[7, 7, 8], 10);
        assert_eq!(outcome.admitted, vec![7, 7, 8]);
        assert_eq!(outcome.curr_state, vec![7, 7, 8]);
    }

    #[test]
    fn empty_candidates_is_a_noop() {
        let outcome = merge(&[3, 1, 4], &[], 10);
        assert_eq!(outcome.admitted, Vec::<i64>::new());
        assert_eq!(outcome.curr_state, outcome.prev_state);
    }

    #[test]
    fn zero_capacity_window_stays_empty() {
        let outcome = merge(&[], &[1, 2, 3], 0);
        assert_eq!(outcome.curr_state, Vec::<i64>::new());
        assert_eq!(outcome.average, 0.0);
    }

    #[test]
    fn average_is_full_precision() {
        let outcome = merge(&[], &[1, 2], 10);
        assert_eq!(outcome.average, 1.5);
    }

    #[test]
    fn empty_window_averages_zero() {
        let outcome = merge(&[], &[], 10);
        assert_eq!(outcome.average, 0.0);
    }
}
