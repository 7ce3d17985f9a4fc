use crate::domain::dataset::{Dataset, Value};
use crate::error::Result;
use std::io::Read;

/// Reads a sales table from a CSV source.
///
/// The first record is the header. Fields are trimmed and typed by column
/// through [`Value::parse_cell`]; record length is checked against the header when
/// rows are added to the dataset, so a ragged file is reported with its row.
pub struct SalesReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SalesReader<R> {
    /// Creates a new `SalesReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Reads the whole source into a [`Dataset`].
    pub fn dataset(mut self) -> Result<Dataset> {
        let columns = self
            .reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();
        let mut dataset = Dataset::new(columns);

        for record in self.reader.records() {
            let record = record?;
            let row = record
                .iter()
                .enumerate()
                .map(|(i, field)| {
                    let column = dataset.columns().get(i).map_or("", String::as_str);
                    Value::parse_cell(column, field)
                })
                .collect();
            dataset.push_row(row)?;
        }

        Ok(dataset)
    }
}
