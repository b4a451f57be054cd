//! # Core Module
//!
//! Stateless building blocks for the discrete Koyama structure factor.
//!
//! ## Architecture
//!
//! - **Chain Geometry** ([`chain`]) - Validated site diameter, bond length, chain length and
//!   persistence length, with the derived bond-angle cosines
//! - **Bond-Angle Moments** ([`moments`]) - First and second moments of the bond-angle cosine
//!   under the truncated Boltzmann distribution
//! - **Root Finding** ([`solver`]) - The scalar root-finder capability and its Newton
//!   implementation
//! - **Kernel** ([`kernel`]) - Fourth-moment expansion and the generalized Gaussian pair
//!   contribution for a single separation
//! - **Omega Models** ([`omega`]) - The intra-molecular correlation trait and the Koyama model
//! - **I/O** ([`io`]) - Wavevector grids and `k,omega` tables
//! - **Math** ([`math`]) - Small numeric helpers

pub mod chain;
pub mod io;
pub mod kernel;
pub mod math;
pub mod moments;
pub mod omega;
pub mod solver;
