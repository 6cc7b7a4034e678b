//! Packing pipeline: configuration, the generation loop, and its results.
pub mod config;
pub mod runner;

/// Default stall budget: consecutive rejected candidates tolerated before the
/// run fails as infeasible.
pub const DEFAULT_MAX_REJECTIONS: usize = 50_000;
