//! # Koyama Core Library
//!
//! Closed-form intra-molecular structure factors ω(k) for semi-flexible polymer chains under
//! the discrete Koyama bond-angle model (Honnell, Curro & Schweizer, *Macromolecules* 1990,
//! 23, 3496), intended as the intra-molecular input of PRISM-style liquid-state calculations.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless numerics: chain geometry, bond-angle moments, the
//!   root finder used for the bending energy, the per-separation kernel, the
//!   [`Omega`](core::omega::Omega) trait and its [`DiscreteKoyama`](core::omega::DiscreteKoyama)
//!   implementation, plus wavevector-grid and table I/O.
//!
//! - **[`engine`]: The Logic Core.** Configuration, progress reporting, grid memoization and the
//!   (optionally parallel) structure-factor task.
//!
//! - **[`workflows`]: The Public API.** End-to-end entry points that turn a configuration and a
//!   wavevector grid into a structure factor.

pub mod core;
pub mod engine;
pub mod workflows;
