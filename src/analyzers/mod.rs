//! Derived views over the loaded inputs.
//!
//! Each reducer reads the same read-only input collections and produces one
//! section of the merged dataset; `merge` runs all three and attaches the
//! provenance metadata.

pub mod detail;
pub mod geographic;
pub mod merge;
pub mod temporal;
pub mod types;
pub mod utility;
