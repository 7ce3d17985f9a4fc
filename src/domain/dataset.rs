use crate::error::{Result, SalesError};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

pub const TIMESTAMP: &str = "Timestamp";
pub const PRICE: &str = "Price";
pub const QUANTITY: &str = "Quantity";
pub const PRODUCT: &str = "Product";

/// Columns every sales dataset must carry. Any other column is kept but ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [TIMESTAMP, PRICE, QUANTITY, PRODUCT];

/// A single cell of a tabular sales file.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Empty,
    Text(String),
    Number(Decimal),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Infers a cell value from a raw text field.
    ///
    /// Blank fields are `Empty`, anything that reads as a decimal (plain or
    /// scientific notation) is a `Number`, everything else stays `Text`.
    pub fn parse_field(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Value::Empty;
        }
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map(Value::Number)
            .unwrap_or_else(|_| Value::Text(raw.to_string()))
    }

    /// A text field kept exactly as written; only blank fields become `Empty`.
    pub fn text_field(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Value::Empty
        } else {
            Value::Text(raw.to_string())
        }
    }

    /// Types a raw field by the column it sits in.
    ///
    /// `Product` labels are never read as numbers, so `007` and `7` stay
    /// distinct products. Every other column goes through [`Value::parse_field`].
    pub fn parse_cell(column: &str, raw: &str) -> Self {
        if column == PRODUCT {
            Value::text_field(raw)
        } else {
            Value::parse_field(raw)
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The grouping label of a cell. Labels are taken verbatim, so "A" and "a"
    /// are different products.
    pub fn label(&self) -> Option<String> {
        match self {
            Value::Empty => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
            Value::DateTime(dt) => write!(f, "{}", dt),
        }
    }
}

/// An in-memory sales table: named columns and rows of cells in file order.
///
/// Once handed to the engine a dataset is only ever borrowed immutably; any
/// derived values live in working copies owned by the computation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, rejecting rows whose width does not match the header.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(SalesError::ParseError(format!(
                "row {} has {} fields, expected {}",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Checks the contract the engine relies on: the four required columns
    /// exist and every `Price` / `Quantity` cell is numeric.
    pub fn validate_schema(&self) -> Result<()> {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| self.column_index(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(SalesError::SchemaError(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        for name in [PRICE, QUANTITY] {
            let Some(idx) = self.column_index(name) else {
                continue;
            };
            if let Some(pos) = self.rows.iter().position(|r| r[idx].as_decimal().is_none()) {
                return Err(SalesError::SchemaError(format!(
                    "non-numeric {} {:?} in row {}",
                    name,
                    self.rows[pos][idx].to_string(),
                    pos + 1
                )));
            }
        }

        Ok(())
    }
}
