use super::csv::sales_reader::SalesReader;
use super::xlsx::sales_reader::load_xlsx;
use crate::domain::dataset::Dataset;
use crate::error::{Result, SalesError};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// File formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
}

impl FileFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("csv") => Ok(FileFormat::Csv),
            Some("xlsx") => Ok(FileFormat::Xlsx),
            _ => Err(SalesError::FormatError(path.display().to_string())),
        }
    }
}

/// Loads and validates a sales file.
///
/// Dispatches on the extension, parses the file and checks the schema, so a
/// returned dataset always has the four required columns with numeric
/// `Price` and `Quantity`.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let format = FileFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "loading dataset");

    let dataset = match format {
        FileFormat::Csv => SalesReader::new(File::open(path)?).dataset()?,
        FileFormat::Xlsx => load_xlsx(path)?,
    };
    dataset.validate_schema()?;

    info!(path = %path.display(), rows = dataset.len(), "dataset loaded");
    Ok(dataset)
}
