use crate::domain::dataset::Dataset;
use crate::domain::ports::DatasetStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory slot for the session's current dataset.
///
/// The dataset sits behind an `Arc` so a snapshot is a cheap handle clone;
/// a later `replace` swaps the slot without touching snapshots already taken.
#[derive(Default, Clone)]
pub struct InMemoryDatasetStore {
    current: Arc<RwLock<Option<Arc<Dataset>>>>,
}

impl InMemoryDatasetStore {
    /// Creates a new, empty dataset store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DatasetStore for InMemoryDatasetStore {
    async fn replace(&self, dataset: Dataset) -> Result<()> {
        let mut current = self.current.write().await;
        *current = Some(Arc::new(dataset));
        Ok(())
    }

    async fn snapshot(&self) -> Result<Option<Arc<Dataset>>> {
        let current = self.current.read().await;
        Ok(current.clone())
    }
}
