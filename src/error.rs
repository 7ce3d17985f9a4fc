use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum SalesError {
    #[error("Unsupported file type: {0}")]
    #[diagnostic(
        code(sales::format),
        help("only .csv and .xlsx files are accepted")
    )]
    FormatError(String),

    #[error("Error reading file: {0}")]
    #[diagnostic(code(sales::parse))]
    ParseError(String),

    #[error("Invalid dataset: {0}")]
    #[diagnostic(code(sales::schema))]
    SchemaError(String),

    #[error("Cannot parse timestamp {value:?} in row {row}")]
    #[diagnostic(code(sales::timestamp))]
    TimestampParseError { row: usize, value: String },

    #[error("{0}")]
    #[diagnostic(code(sales::missing_parameter))]
    MissingParameterError(String),

    #[error("Invalid parameter: {0}")]
    #[diagnostic(code(sales::invalid_parameter))]
    InvalidParameterError(String),

    #[error("Computation error: {0}")]
    #[diagnostic(code(sales::computation))]
    ComputationError(String),

    #[error("No data uploaded yet")]
    #[diagnostic(code(sales::no_dataset))]
    NoDatasetError,

    #[error("IO error: {0}")]
    #[diagnostic(code(sales::io))]
    IoError(#[from] std::io::Error),
}

impl From<csv::Error> for SalesError {
    fn from(err: csv::Error) -> Self {
        SalesError::ParseError(err.to_string())
    }
}

impl From<calamine::XlsxError> for SalesError {
    fn from(err: calamine::XlsxError) -> Self {
        SalesError::ParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SalesError>;
