//! Error types for beamo operations.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while dumping a document tree.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image probe error: {0}")]
    Image(#[from] image::ImageError),

    #[error("No suitable delimiter for verbatim text: {0:?}")]
    NoVerbatimDelimiter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Non-fatal conditions recorded while dumping.
///
/// The walk continues after these; they are returned alongside the output
/// rather than logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// An equation image had no readable LaTeX source next to it, so the
    /// rendered bitmap was included instead.
    MissingEquationSource {
        /// The source path that failed to resolve.
        src: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingEquationSource { src } => {
                write!(f, "could not find latex equation: {}", src)
            }
        }
    }
}
