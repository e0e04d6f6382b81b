use thiserror::Error;

pub type FloatResult<T> = Result<T, FloatError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FloatError {
    #[error("Invalid precision: {0}")]
    InvalidPrecision(String),
}
