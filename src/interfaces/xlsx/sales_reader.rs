use crate::domain::dataset::{Dataset, Value};
use crate::error::{Result, SalesError};
use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_decimal::Decimal;
use std::path::Path;

/// Loads the first worksheet of an `.xlsx` workbook as a sales table.
///
/// The first row is the header. Date-formatted cells become
/// [`Value::DateTime`] and numeric cells [`Value::Number`]. String cells stay
/// text even when they look numeric, so a `"007"` product label survives.
pub fn load_xlsx(path: &Path) -> Result<Dataset> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SalesError::ParseError("Workbook contains no sheets".to_string()))?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    let columns = match rows.next() {
        Some(header) => header.iter().map(|cell| cell.to_string().trim().to_string()).collect(),
        None => Vec::new(),
    };
    let mut dataset = Dataset::new(columns);

    for (row_idx, row) in rows.enumerate() {
        let values = row
            .iter()
            .enumerate()
            .map(|(col_idx, cell)| cell_value(cell, row_idx + 1, col_idx + 1))
            .collect::<Result<Vec<Value>>>()?;
        dataset.push_row(values)?;
    }

    Ok(dataset)
}

fn cell_value(cell: &Data, row: usize, col: usize) -> Result<Value> {
    let value = match cell {
        Data::Empty => Value::Empty,
        Data::String(s) => Value::text_field(s),
        Data::Float(f) => Value::Number(Decimal::try_from(*f).map_err(|e| {
            SalesError::ParseError(format!("cell ({}, {}): {}", row, col, e))
        })?),
        Data::Int(i) => Value::Number(Decimal::from(*i)),
        Data::Bool(b) => Value::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => Value::DateTime(naive),
            None => Value::Text(cell.to_string()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::Text(s.clone()),
        Data::Error(e) => {
            return Err(SalesError::ParseError(format!(
                "cell ({}, {}) holds error {:?}",
                row, col, e
            )));
        }
    };
    Ok(value)
}
