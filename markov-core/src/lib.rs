//! Word-level Markov chain text generation library.
//!
//! This crate provides:
//! - A prefix-keyed suffix table learned from whitespace-delimited text
//! - Random walks over that table to produce new text
//! - A lazy word scanner and a space-joined output writer
//!
//! The model is built once from one or more documents and is then
//! read-only while generating.

/// Markov chain model: configuration, prefix window, states and generation.
pub mod model;

/// Token source and output sink.
pub mod io;

/// Errors returned by the library.
pub mod error;

pub use error::ChainError;
pub use model::chain::{Chain, Walk};
pub use model::config::{ChainConfig, MAX_OUTPUT, N_PREFIX};
pub use model::prefix::{Prefix, Word};
