use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    /// A column the caller configured is absent from the input table.
    #[error("required column '{name}' is missing")]
    MissingColumn { name: String },
    /// A value is wider than the relational schema allows for its column.
    #[error("column '{column}' exceeds {limit} characters (longest value: {longest})")]
    ColumnWidth {
        column: String,
        limit: usize,
        longest: usize,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SurveyError>;
