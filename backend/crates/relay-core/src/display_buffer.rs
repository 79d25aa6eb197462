use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Fixed-capacity, insertion-ordered list of rendered messages.
///
/// Pushing past capacity evicts from the front, so the list always holds
/// the newest `capacity` entries, oldest first.
#[derive(Debug, Clone)]
pub struct RecentEntries {
    entries: VecDeque<String>,
    capacity: usize,
}

impl RecentEntries {
    /// A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry and return how many were evicted.
    pub fn push(&mut self, entry: String) -> usize {
        self.entries.push_back(entry);

        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

/// Shared handle to the subscriber's [`RecentEntries`].
///
/// The delivery task is the only writer; page renders take snapshots.
/// The lock is never held across an await point.
#[derive(Debug, Clone)]
pub struct DisplayBuffer {
    inner: Arc<RwLock<RecentEntries>>,
    capacity: usize,
}

impl DisplayBuffer {
    pub fn new(capacity: usize) -> Self {
        let entries = RecentEntries::new(capacity);
        Self {
            capacity: entries.capacity(),
            inner: Arc::new(RwLock::new(entries)),
        }
    }

    /// Append a rendered message, returning the number of entries held.
    pub async fn push(&self, entry: String) -> usize {
        let mut inner = self.inner.write().await;
        let evicted = inner.push(entry);
        if evicted > 0 {
            log::trace!("Display buffer evicted {} entries", evicted);
        }
        inner.len()
    }

    /// Copy of the current entries, oldest first.
    pub async fn snapshot(&self) -> Vec<String> {
        self.inner.read().await.to_vec()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
