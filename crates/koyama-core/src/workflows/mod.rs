//! # Workflows Module
//!
//! Top-level entry points of the library. A workflow takes a validated configuration and a
//! wavevector grid, drives the engine through its phases while reporting progress, and returns
//! everything a caller needs to tabulate or inspect the result.
//!
//! - **Omega Workflow** ([`omega`]) - Bending-energy solve followed by the structure-factor
//!   evaluation.

pub mod omega;
