use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// State recovery needs exactly one generation of outputs.
    OutputCount { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::OutputCount { expected, actual } => write!(
                f,
                "expected {} consecutive outputs to recover state, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for Error {}
