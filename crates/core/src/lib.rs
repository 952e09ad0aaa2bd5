//! # Academy Core
//!
//! Shared types for the academy scheduling tools: the day/slot data model,
//! the static weekday and subject vocabularies, and the common error type.
//!
//! Nothing in this crate performs I/O. The vocabularies are compiled-in
//! constants that every caller reads concurrently.

/// Error type shared by the extractor and the HTTP surface
pub mod errors;
/// Schedule data model
pub mod models;
/// Weekday aliases and subject keywords
pub mod vocabulary;
