//! Computational units driven by the workflows.
//!
//! Each task reports its own progress and returns plain values; the workflows decide how the
//! results are combined and presented.

pub mod structure_factor;
