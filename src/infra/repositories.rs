//! Repository abstraction over in-memory collections.
//!
//! Replaces ad-hoc module-level mutable arrays with one explicit contract,
//! so the in-memory backend and a future HTTP-backed one are
//! interchangeable behind the service facades.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Object-safe repository operations.
///
/// Note: `mutate` and the predicate queries take closures and live as
/// inherent methods on [`InMemoryRepository`]; for testing, mock at the
/// service level instead.
#[async_trait]
pub trait Repository<T: Clone + Send + Sync + 'static>: Send + Sync {
    /// List all rows in insertion order
    async fn list(&self) -> Vec<T>;

    /// Get a row by id
    async fn get(&self, id: Uuid) -> Option<T>;

    /// Insert a row, replacing any existing row with the same id
    async fn insert(&self, id: Uuid, value: T);

    /// Remove a row by id, returning whether it existed
    async fn remove(&self, id: Uuid) -> bool;

    /// Number of rows
    async fn len(&self) -> usize;
}

/// In-memory repository keeping rows in insertion order.
///
/// Insertion order is what list pages are rendered in, so it is kept
/// stable rather than relying on hash iteration order.
pub struct InMemoryRepository<T> {
    rows: RwLock<Vec<(Uuid, T)>>,
}

impl<T: Clone + Send + Sync + 'static> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Build a repository pre-populated with rows (used by seeding)
    pub fn from_rows(rows: Vec<(Uuid, T)>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Mutate a row in place, returning the updated value
    pub async fn mutate<F>(&self, id: Uuid, f: F) -> Option<T>
    where
        F: FnOnce(&mut T) + Send,
    {
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|(row_id, _)| *row_id == id)?;
        f(&mut row.1);
        Some(row.1.clone())
    }

    /// First row matching the predicate
    pub async fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool + Send,
    {
        let rows = self.rows.read().await;
        rows.iter()
            .map(|(_, value)| value)
            .find(|value| predicate(value))
            .cloned()
    }

    /// All rows matching the predicate, in insertion order
    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool + Send,
    {
        let rows = self.rows.read().await;
        rows.iter()
            .map(|(_, value)| value)
            .filter(|value| predicate(value))
            .cloned()
            .collect()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Vec<T> {
        let rows = self.rows.read().await;
        rows.iter().map(|(_, value)| value.clone()).collect()
    }

    async fn get(&self, id: Uuid) -> Option<T> {
        let rows = self.rows.read().await;
        rows.iter()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, value)| value.clone())
    }

    async fn insert(&self, id: Uuid, value: T) {
        let mut rows = self.rows.write().await;
        if let Some(row) = rows.iter_mut().find(|(row_id, _)| *row_id == id) {
            row.1 = value;
        } else {
            rows.push((id, value));
        }
    }

    async fn remove(&self, id: Uuid) -> bool {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|(row_id, _)| *row_id != id);
        rows.len() != before
    }

    async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}
