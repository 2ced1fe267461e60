//! In-memory document storage.
//!
//! Uploaded documents are kept so follow-up questions can reference them by
//! id. Storage is process-memory only: records survive until restart, there
//! is no eviction and no durability. That is acceptable for single-session
//! legal review, and the [`DocumentStore`] trait is the seam where a durable
//! backend could be swapped in.

use crate::processing::Language;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

/// Metadata supplied when a document is stored.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    /// Original filename, or a caller-supplied label for pasted text.
    pub filename: String,
    /// Language the document was submitted under.
    pub language: Language,
}

/// A stored document record. Immutable after creation.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    /// Generated identifier (UUID v4).
    pub id: Uuid,
    /// Extracted raw text.
    pub text: String,
    /// Original filename.
    pub filename: String,
    /// Submission language.
    pub language: Language,
    /// Time the document was stored.
    pub uploaded_at: OffsetDateTime,
}

/// Listing entry returned by [`DocumentStore::list`].
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    /// Document identifier.
    pub id: String,
    /// Original filename.
    pub filename: String,
    /// Submission language.
    pub language: String,
    /// RFC 3339 upload timestamp.
    pub upload_time: String,
}

/// Keyed storage for extracted documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a document and return its fresh identifier.
    async fn put(&self, text: String, metadata: DocumentMetadata) -> Uuid;

    /// Fetch a stored document by id.
    async fn get(&self, id: Uuid) -> Option<StoredDocument>;

    /// List stored documents for display, oldest first.
    async fn list(&self) -> Vec<DocumentSummary>;
}

/// Process-local [`DocumentStore`] backed by a `RwLock<HashMap>`.
///
/// The lock makes concurrent request handling safe; no guard existed in
/// earlier single-threaded deployments of this tool.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<Uuid, StoredDocument>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn put(&self, text: String, metadata: DocumentMetadata) -> Uuid {
        let id = Uuid::new_v4();
        let record = StoredDocument {
            id,
            text,
            filename: metadata.filename,
            language: metadata.language,
            uploaded_at: OffsetDateTime::now_utc(),
        };
        let mut documents = self.documents.write().expect("document store lock poisoned");
        documents.insert(id, record);
        id
    }

    async fn get(&self, id: Uuid) -> Option<StoredDocument> {
        let documents = self.documents.read().expect("document store lock poisoned");
        documents.get(&id).cloned()
    }

    async fn list(&self) -> Vec<DocumentSummary> {
        let documents = self.documents.read().expect("document store lock poisoned");
        let mut records: Vec<&StoredDocument> = documents.values().collect();
        records.sort_by_key(|record| record.uploaded_at);
        records
            .into_iter()
            .map(|record| DocumentSummary {
                id: record.id.to_string(),
                filename: record.filename.clone(),
                language: record.language.as_str().to_string(),
                upload_time: record
                    .uploaded_at
                    .format(&Rfc3339)
                    .unwrap_or_default(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn metadata(filename: &str) -> DocumentMetadata {
        DocumentMetadata {
            filename: filename.to_string(),
            language: Language::English,
        }
    }

    #[tokio::test]
    async fn put_then_get_returns_exact_record() {
        let store = MemoryStore::new();
        let id = store
            .put("deed text".to_string(), metadata("deed.pdf"))
            .await;

        let record = store.get(id).await.expect("record present");
        assert_eq!(record.id, id);
        assert_eq!(record.text, "deed text");
        assert_eq!(record.filename, "deed.pdf");
        assert_eq!(record.language, Language::English);
    }

    #[tokio::test]
    async fn get_with_unknown_id_returns_none() {
        let store = MemoryStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn sequential_puts_never_collide() {
        let store = MemoryStore::new();
        let mut seen = HashSet::new();
        for i in 0..1000 {
            let id = store
                .put(format!("document {i}"), metadata("doc.txt"))
                .await;
            assert!(seen.insert(id), "duplicate id generated: {id}");
        }
        assert_eq!(store.list().await.len(), 1000);
    }

    #[tokio::test]
    async fn list_reports_stored_metadata() {
        let store = MemoryStore::new();
        let id = store
            .put("agreement".to_string(), metadata("loan.docx"))
            .await;

        let listing = store.list().await;
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, id.to_string());
        assert_eq!(listing[0].filename, "loan.docx");
        assert_eq!(listing[0].language, "english");
        assert!(!listing[0].upload_time.is_empty());
    }
}
