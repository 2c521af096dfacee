//! Top-level module for the Markov chain model.
//!
//! This module provides:
//! - Model configuration (`ChainConfig`)
//! - The sliding prefix window and its boundary marker (`Prefix`, `Word`)
//! - Internal suffix list management (`State`)
//! - Training and generation (`Chain`)

/// Prefix window length and generation cap.
pub mod config;

/// Start-of-document marker and the sliding prefix window.
pub mod prefix;

/// Ordered suffix list for one prefix.
///
/// Supports uniform random sampling over observed suffixes.
/// This module is not exposed publicly.
mod state;

/// Prefix-keyed suffix table.
///
/// Handles document ingestion, table lookups and random walks.
pub mod chain;
