//! Core types and definitions for the SALVO simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! grid positions, enums, commands, read-only views, feedback events,
//! errors, and tuning constants. It has no randomness and no I/O.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
