//! Miscellaneous math functions for general use

/// Free functions for normalizing, wrapping and unrolling angles.
pub mod angular;

/// Polynomial evaluation
pub mod series;
pub use series::taylor;
