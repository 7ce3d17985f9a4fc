use super::engine::{compute_monthly_revenue, compute_top_products};
use crate::domain::dataset::Dataset;
use crate::domain::ports::DatasetStoreBox;
use crate::domain::query::{MonthlyQuery, TopProductsQuery};
use crate::error::{Result, SalesError};
use crate::interfaces::loader::load_dataset;
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// The boundary between uploaded files and the analysis engine.
///
/// `SalesService` owns the session's dataset store. Uploads replace the
/// current dataset wholesale; each query works on a snapshot taken when it
/// starts, and the engine only ever borrows that snapshot.
pub struct SalesService {
    store: DatasetStoreBox,
}

impl SalesService {
    /// Creates a new `SalesService` backed by the given dataset store.
    pub fn new(store: DatasetStoreBox) -> Self {
        Self { store }
    }

    /// Loads a `.csv` or `.xlsx` file and makes it the current dataset.
    ///
    /// Returns the number of rows loaded. On failure the previous dataset,
    /// if any, stays current.
    pub async fn upload(&self, path: &Path) -> Result<usize> {
        let dataset = load_dataset(path)?;
        let rows = dataset.len();
        self.store.replace(dataset).await?;
        info!(rows, "dataset uploaded");
        Ok(rows)
    }

    /// Total sales for a month and year. Both arguments are required.
    pub async fn monthly_sales(&self, month: Option<u32>, year: Option<i32>) -> Result<Decimal> {
        let (Some(month), Some(year)) = (month, year) else {
            return Err(SalesError::MissingParameterError(
                "Month and year are required".to_string(),
            ));
        };
        let query = MonthlyQuery::new(month, year)?;
        let dataset = self.current().await?;

        let total = compute_monthly_revenue(&dataset, query)?;
        info!(month, year, %total, "monthly sales computed");
        Ok(total)
    }

    /// The best-selling product labels; `n` defaults to three.
    pub async fn top_products(&self, n: Option<usize>) -> Result<Vec<String>> {
        let query = match n {
            Some(n) => TopProductsQuery::new(n)?,
            None => TopProductsQuery::default(),
        };
        let dataset = self.current().await?;

        let products = compute_top_products(&dataset, query)?;
        info!(n = query.n(), returned = products.len(), "top products computed");
        Ok(products)
    }

    async fn current(&self) -> Result<Arc<Dataset>> {
        self.store.snapshot().await?.ok_or(SalesError::NoDatasetError)
    }
}
