#![warn(missing_docs)]
//! Latticedisk specific error structures
use std::{error::Error, fmt::Display};

/// Latticedisk application specific Result type
pub type LdResult<T> = std::result::Result<T, LatticeError>;

/// Errors that can be returned by various latticedisk functions.
#[derive(Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// the maximum radius is not a positive integer
    InvalidRadius(String),
    /// errors while evaluating command line values
    Console(String),
    /// errors while reading or parsing a configuration file
    Config(String),
    /// errors while writing the rendered point list
    Render(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for LatticeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRadius(m) => {
                write!(f, "InvalidRadius:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Config(m) => {
                write!(f, "Config:{m}")
            }
            Self::Render(m) => {
                write!(f, "Render:{m}")
            }
            Self::Other(m) => write!(f, "Latticedisk Error:Other:{m}"),
        }
    }
}
impl Error for LatticeError {}

impl std::convert::From<String> for LatticeError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
