use super::dataset::Dataset;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Holds the current dataset of a session.
///
/// A store keeps at most one dataset. `replace` swaps it wholesale and
/// `snapshot` hands out a shared, immutable handle, so a query never sees a
/// half-replaced dataset.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    async fn replace(&self, dataset: Dataset) -> Result<()>;
    async fn snapshot(&self) -> Result<Option<Arc<Dataset>>>;
}

pub type DatasetStoreBox = Box<dyn DatasetStore>;
