//! Query builder — turns CLI inputs into an [`AssocQuery`].
//!
//! The association type token (`gene-disease`) seeds the first two filter
//! clauses; explicit `key=value` filters follow, overwriting seeded keys in
//! place when they collide. Serialization joins the clauses with `" AND "`
//! in insertion order.
//!
//! Filter values are inserted verbatim; a value containing `"` yields a
//! malformed query string. No escaping is attempted.

use crate::types::AssocQuery;
use thiserror::Error;

/// Input validation failures, detected before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The association type token did not split into exactly two non-empty
    /// categories on `-`.
    #[error("malformed association type {0:?}: expected subject-object, e.g. gene-disease")]
    MalformedType(String),
    /// An explicit filter did not contain exactly one `=`.
    #[error("malformed filter {0:?}: expected key=value")]
    MalformedFilter(String),
}

// ---------------------------------------------------------------------------
// Filter map
// ---------------------------------------------------------------------------

/// Insertion-ordered key→value mapping for filter clauses.
///
/// Overwriting an existing key keeps its original position; new keys append.
/// Clause counts are single digits, so the backing is a plain `Vec`.
#[derive(Debug, Default)]
struct FilterMap(Vec<(String, String)>);

impl FilterMap {
    fn insert(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    /// Join the clauses as `key:"value" AND key:"value" …` in map order.
    fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{k}:\"{v}\""))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

/// Split a hyphen-delimited association type token into its subject and
/// object categories. Exactly one `-` with non-empty sides is required.
fn split_type_pair(token: &str) -> Result<(&str, &str), QueryError> {
    match token.split_once('-') {
        Some((subject, object))
            if !subject.is_empty() && !object.is_empty() && !object.contains('-') =>
        {
            Ok((subject, object))
        }
        _ => Err(QueryError::MalformedType(token.to_string())),
    }
}

/// Assemble the output field list for one invocation: requested fields
/// followed by extra fields, in that order, no deduplication.
///
/// A resolved list that is exactly `["*"]` or `[""]` collapses to the empty
/// list, meaning "project every field the index returns". Always returns a
/// fresh `Vec`; invocations never share field-list state.
pub fn field_list(fields: &[String], extra: &[String]) -> Vec<String> {
    let mut fl: Vec<String> = fields.to_vec();
    fl.extend(extra.iter().cloned());
    if fl.len() == 1 && (fl[0] == "*" || fl[0].is_empty()) {
        fl.clear();
    }
    fl
}

/// Build the query spec from the association type token and explicit
/// `key=value` filters.
///
/// The filter map is seeded with `subject_category` and `object_category`
/// from the type token, in that order; explicit filters may overwrite either
/// without moving it. Pure and idempotent: identical inputs yield
/// byte-identical query strings.
pub fn build(
    type_token: &str,
    filters: &[String],
    fields: Vec<String>,
    rows: usize,
) -> Result<AssocQuery, QueryError> {
    let (subject_category, object_category) = split_type_pair(type_token)?;

    let mut qmap = FilterMap::default();
    qmap.insert("subject_category".to_string(), subject_category.to_string());
    qmap.insert("object_category".to_string(), object_category.to_string());

    for entry in filters {
        let (key, value) = entry
            .split_once('=')
            .filter(|(_, v)| !v.contains('='))
            .ok_or_else(|| QueryError::MalformedFilter(entry.clone()))?;
        qmap.insert(key.to_string(), value.to_string());
    }

    Ok(AssocQuery {
        q: qmap.to_query_string(),
        fields,
        rows,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
