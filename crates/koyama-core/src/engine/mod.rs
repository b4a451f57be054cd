//! # Engine Module
//!
//! Orchestration around the stateless numerics in [`crate::core`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Chain parameters, root-finder settings and pair counting,
//!   assembled through a builder
//! - **Progress Monitoring** ([`progress`]) - Phase and task events for front ends
//! - **Memoization** ([`cache`]) - Caller-owned reuse of structure factors for repeated grids
//! - **Tasks** ([`tasks`]) - The structure-factor evaluation, parallel over separations when the
//!   `parallel` feature is enabled
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping the lower layers

pub mod cache;
pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
