/// Errors raised while loading a functional-group reference table.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    /// I/O error reading the reference file
    #[error("Failed to read reference table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent
    #[error("Reference table is missing column '{0}'")]
    MissingColumn(String),

    /// A bound could not be read as a number
    #[error("Row {row}: '{value}' in column '{column}' is not a number")]
    InvalidBound {
        row: usize,
        column: String,
        value: String,
    },

    /// `min` is greater than `max`
    #[error("Row {row} ({key}): min {min} is greater than max {max}")]
    InvertedBounds {
        row: usize,
        key: String,
        min: f64,
        max: f64,
    },
}

/// Errors raised while parsing an uploaded two-column spectrum.
#[derive(Debug, thiserror::Error)]
pub enum SpectrumError {
    /// I/O error reading the spectrum file
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The header row has fewer than two whitespace-separated columns
    #[error("expected at least two whitespace-delimited columns, found {found}")]
    TooFewColumns { found: usize },

    /// A data row has fewer than two fields
    #[error("line {line}: expected at least two values, found {found}")]
    ShortRow { line: usize, found: usize },

    /// A field could not be read as a number
    #[error("line {line}: '{value}' is not a number")]
    InvalidValue { line: usize, value: String },

    /// Header present but no data rows
    #[error("no data rows")]
    Empty,
}
