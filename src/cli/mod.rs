//! Command implementations for the `rmap` binary.

pub mod commands;
