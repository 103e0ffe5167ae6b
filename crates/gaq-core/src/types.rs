//! Core types for gaq-core.
//!
//! This module defines the two data structures shared across the pipeline:
//! the fully-resolved [`AssocQuery`] handed to the search client, and the
//! sparse [`Document`] records it returns.

/// A single association document returned by the index.
///
/// Documents are sparse: the index only returns the fields a document
/// actually carries, so no field is guaranteed present on every record.
/// `serde_json::Map` preserves the key order the index responded with, which
/// is what drives column order when the caller asked for every field.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// A fully-resolved query specification, built once per invocation.
///
/// Produced by [`query::build`](crate::query::build); consumed by the search
/// client and, for its field list, by the projector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssocQuery {
    /// Boolean query string, a flat AND-conjunction of `key:"value"` clauses.
    pub q: String,
    /// Requested output fields, in request order. Empty means "every field
    /// the index returns" (wildcard projection).
    pub fields: Vec<String>,
    /// Row cap for the single bounded fetch.
    pub rows: usize,
}
