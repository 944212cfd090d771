// Worker pool module
// Bounds how many requests touch the filesystem at once

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::logger;

/// Fixed-size pool of request slots.
///
/// Requests beyond capacity wait in the semaphore's FIFO queue; there is no
/// rejection and no timeout. A slot is held for as long as its permit lives,
/// so a download keeps its slot until the body stream is dropped.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    pub fn new(size: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    /// Slots not currently held by a request
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Wait for a free slot.
    ///
    /// Returns `None` only if the semaphore was closed, which this pool never
    /// does; callers then proceed without a slot.
    pub async fn acquire(&self) -> Option<OwnedSemaphorePermit> {
        if self.available() == 0 {
            logger::log_warning(&format!(
                "All {} workers busy, request queued",
                self.size
            ));
        }
        Arc::clone(&self.permits).acquire_owned().await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_requests_beyond_capacity_wait() {
        let pool = WorkerPool::new(2);
        assert_eq!(pool.available(), 2);

        let first = pool.acquire().await.unwrap();
        let _second = pool.acquire().await.unwrap();
        assert_eq!(pool.available(), 0);

        let blocked = tokio::time::timeout(Duration::from_millis(50), pool.acquire()).await;
        assert!(blocked.is_err(), "third request should queue, not run");

        drop(first);
        let third = tokio::time::timeout(Duration::from_millis(500), pool.acquire()).await;
        assert!(third.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_slots() {
        let pool = WorkerPool::new(1);
        let clone = pool.clone();

        let _held = pool.acquire().await.unwrap();
        assert_eq!(clone.available(), 0);
    }
}
