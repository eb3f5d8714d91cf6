//! Command implementations.

pub mod clean;
pub mod regions;
pub mod sample;
