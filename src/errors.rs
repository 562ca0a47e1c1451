use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuobiaoError {
    /// Tile name not in the 34-tile catalog.
    InvalidTile { name: String },
    /// Hand length does not match the operation's requirement.
    InvalidHandSize { expected: usize, actual: usize },
    /// Hand notation string could not be parsed.
    Parse { input: String, message: String },
}

impl fmt::Display for GuobiaoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuobiaoError::InvalidTile { name } => {
                write!(f, "Invalid tile name: '{}'", name)
            }
            GuobiaoError::InvalidHandSize { expected, actual } => {
                write!(f, "Invalid hand size: expected {} tiles, got {}", expected, actual)
            }
            GuobiaoError::Parse { input, message } => {
                write!(f, "Parse error on '{}': {}", input, message)
            }
        }
    }
}

impl std::error::Error for GuobiaoError {}

pub type GuobiaoResult<T> = Result<T, GuobiaoError>;

#[cfg(feature = "python")]
impl From<GuobiaoError> for pyo3::PyErr {
    fn from(err: GuobiaoError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
