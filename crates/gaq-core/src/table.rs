//! Projector — turns sparse result documents into a tab-separated table.
//!
//! Projection is all-or-nothing: the row-count checks run before a single
//! cell is rendered, so either a complete table comes back or an error does.
//!
//! Values are not quoted or escaped; a tab or newline inside a field value
//! will corrupt the row layout.

use crate::types::Document;
use std::io::{self, Write};
use thiserror::Error;

/// Result-semantics failures, detected after the search completes and before
/// any output is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The query matched no documents. Treated as a fatal condition rather
    /// than an empty-but-valid table.
    #[error("no matching documents")]
    NoResults,
    /// The result count exactly filled the row cap, so the result set may
    /// have been cut off. Equality is only evidence, not proof: a true match
    /// count that coincides with the cap trips this too.
    #[error("result set filled the row cap ({rows} rows): raise the cap or allow truncation")]
    Truncated { rows: usize },
}

/// An ordered, optionally header-prefixed table of string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Header row, equal to the effective field list when requested.
    pub header: Option<Vec<String>>,
    /// Data rows, one per document, in result order.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Stream the table to a writer as tab-separated lines, header first.
    pub fn write_tsv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(header) = &self.header {
            writeln!(out, "{}", header.join("\t"))?;
        }
        for row in &self.rows {
            writeln!(out, "{}", row.join("\t"))?;
        }
        Ok(())
    }
}

/// Project documents onto a field list, producing a [`Table`].
///
/// When `fields` is empty the effective field list is resolved exactly once,
/// from the key set of the first document in its returned order; every later
/// document is projected against that fixed list, not its own keys. Fields a
/// document lacks become empty cells.
///
/// Fails with [`TableError::NoResults`] on an empty result set, and with
/// [`TableError::Truncated`] when the document count equals `limit` and the
/// caller did not opt into truncation.
pub fn project(
    docs: &[Document],
    fields: &[String],
    limit: usize,
    truncate_ok: bool,
    header: bool,
) -> Result<Table, TableError> {
    if docs.is_empty() {
        return Err(TableError::NoResults);
    }
    if docs.len() == limit && !truncate_ok {
        return Err(TableError::Truncated { rows: docs.len() });
    }

    // The effective field list is fixed before iteration; later documents
    // never contribute keys.
    let effective: Vec<String> = if fields.is_empty() {
        docs[0].keys().cloned().collect()
    } else {
        fields.to_vec()
    };

    let rows = docs
        .iter()
        .map(|doc| effective.iter().map(|f| cell(doc.get(f))).collect())
        .collect();

    let header = (header && !effective.is_empty()).then(|| effective.clone());

    Ok(Table { header, rows })
}

/// Render a single cell: absent fields become the empty string, string
/// values emit their inner text, anything else its compact JSON form.
fn cell(value: Option<&serde_json::Value>) -> String {
    match value {
        None => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
