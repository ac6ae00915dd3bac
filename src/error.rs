use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    #[error("name at position {index} is empty")]
    EmptyName { index: usize },

    #[error("`{first}` and `{second}` both derive the variable {var}")]
    DuplicateVariable {
        var: String,
        first: String,
        second: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GenError>;
