#![forbid(unsafe_code)]
//! pore_pack: Random sequential addition (RSA) packing of spherical pores.
//!
//! Packs non-overlapping spheres of random radius into a cubic domain until a
//! target volume fraction is reached, by rejection sampling with a bounded
//! stall guard.
//!
//! Modules:
//! - domain: cubic domain and radius-range configuration
//! - pore: the spherical pore value type
//! - sampling: candidate generation (uniform rejection, grid-accelerated overlap tests)
//! - packing: configuration, runner, and results
//! - export: plain-text serialization and the downstream geometry-kernel seam
//!
//! For examples and docs, see README and docs.rs.
pub mod domain;
pub mod error;
pub mod export;
pub mod packing;
pub mod pore;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use pore_pack::prelude::*;`.
pub mod prelude {
    pub use crate::domain::{CubeDomain, RadiusRange};
    pub use crate::error::{Error, Result};
    pub use crate::export::{cut_all, write_pores_csv, SphereCutter};
    pub use crate::packing::config::PackingConfig;
    pub use crate::packing::runner::{generate, Packing, PackingRunner};
    pub use crate::pore::Pore;
    pub use crate::sampling::grid::PoreGrid;
    pub use crate::sampling::{PoreSampling, SampleOutcome, UniformRejectionSampling};
}
