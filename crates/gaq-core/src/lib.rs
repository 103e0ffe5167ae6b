//! gaq-core — Golr Association Query core library.
//!
//! This crate holds the two halves of the extraction pipeline plus the shared
//! types and configuration used by the `gaq` binary.
//!
//! # Architecture
//!
//! ```text
//! CLI inputs ──► Query Builder ──► Solr Client ──► Projector ──► TSV sink
//!                  (query)          (gaq-solr)      (table)
//! ```
//!
//! The flow is strictly linear: a query spec is built once per invocation,
//! executed once against the index, and the returned documents are projected
//! once into a table. Nothing is cached or retried.

pub mod config;
pub mod query;
pub mod table;
pub mod types;

pub use types::{AssocQuery, Document};
