//! Command implementations.

pub mod insert;
