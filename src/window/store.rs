use tokio::sync::RwLock;

use super::merge::{merge, MergeOutcome};

/// Process-wide sliding window of recently admitted integers.
///
/// The store is the only owner of the window contents. `apply` runs the
/// read-merge-commit sequence under a single write lock, so two requests
/// racing on the same window cannot lose each other's updates. Fetching
/// candidates happens before the lock is taken; the critical section is just
/// the in-memory merge.
pub struct WindowStore {
    capacity: usize,
    items: RwLock<Vec<i64>>,
}

impl WindowStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current window contents.
    pub async fn snapshot(&self) -> Vec<i64> {
        self.items.read().await.clone()
    }

    /// Merges a candidate batch into the window and commits the result.
    pub async fn apply(&self, candidates: &[i64]) -> MergeOutcome {
        let mut items = self.items.write().await;
        let outcome = merge(&items, candidates, self.capacity);
        *items = outcome.curr_state.clone();
        outcome
    }
}

impl std::fmt::Debug for WindowStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowStore")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
