//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, infeasible packings (stall guard), IO, and generic errors.
use thiserror::Error;

use crate::packing::runner::Packing;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The stall guard tripped: no pore was accepted within `attempts`
    /// consecutive candidates. The partial packing accepted so far is attached.
    #[error(
        "packing infeasible: no pore accepted within {attempts} consecutive attempts \
         ({} pores placed, volume fraction {:.4})",
        .partial.pores.len(),
        .partial.achieved_porosity
    )]
    Infeasible {
        attempts: usize,
        partial: Box<Packing>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
