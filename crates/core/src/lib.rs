//! Domain logic for the school directory.
//!
//! This crate is I/O free: intake validation, listing normalization, and
//! stored-filename derivation are all pure functions so they can be used by
//! the API layer and exercised directly in unit tests.

pub mod intake;
pub mod listing;
pub mod naming;
pub mod types;
