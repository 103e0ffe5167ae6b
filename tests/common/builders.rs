//! Test builders — ergonomic constructors for association documents and
//! query inputs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use gaq_core::Document;

// ---------------------------------------------------------------------------
// DocumentBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for sparse association [`Document`] fixtures.
///
/// # Example
///
/// ```rust
/// let doc = DocumentBuilder::new()
///     .field("subject", "MGI:95886")
///     .field("object", "DOID:4")
///     .build();
/// ```
#[derive(Default)]
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.doc.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Document {
        self.doc
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a minimal gene-disease association document.
pub fn assoc_doc(subject: &str, object: &str) -> Document {
    DocumentBuilder::new()
        .field("subject", subject)
        .field("object", object)
        .build()
}

/// Build a corpus of `n` association documents with predictable field values.
pub fn build_corpus(n: usize) -> Vec<Document> {
    (0..n)
        .map(|i| {
            DocumentBuilder::new()
                .field("subject_taxon", "NCBITaxon:9606")
                .field("subject_gene", format!("HGNC:{i}"))
                .field("subject_gene_label", format!("GENE{i}"))
                .field("object", format!("DOID:{}", i % 7))
                .field("object_label", format!("disease {}", i % 7))
                .build()
        })
        .collect()
}

/// Owned string list from literals, for field-list and filter arguments.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
