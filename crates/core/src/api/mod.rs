//! Public API surface.

pub mod high_level;

pub use high_level::*;
