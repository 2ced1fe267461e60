//! Core data types and error definitions for the intake pipeline.

use crate::extract::ExtractionError;
use crate::generation::GenerationError;
use thiserror::Error;
use uuid::Uuid;

/// Errors produced while splitting a document into word chunks.
#[derive(Debug, Error)]
pub enum ChunkingError {
    /// The configured word budget makes chunking impossible.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
}

/// Errors emitted by the document intake pipeline.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Uploaded file could not be converted to text.
    #[error("{0}")]
    Extraction(#[from] ExtractionError),
    /// The generation service call failed.
    #[error("{0}")]
    Generation(#[from] GenerationError),
    /// Chunking step failed to segment the document.
    #[error("Failed to chunk document: {0}")]
    Chunking(#[from] ChunkingError),
    /// Required input was missing or empty.
    #[error("{0}")]
    Validation(String),
    /// Referenced document id is absent from the store.
    #[error("No document found for id {0}. Please upload a document first.")]
    NotFound(Uuid),
}

/// Result of a completed file ingestion.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// Identifier assigned to the stored document.
    pub document_id: Uuid,
    /// Original filename.
    pub filename: String,
    /// Final summary returned by the generation service.
    pub summary: String,
    /// Number of chunks the document was processed as.
    pub chunk_count: usize,
}

/// Result of summarizing raw text.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    /// Final summary returned by the generation service.
    pub summary: String,
    /// Number of chunks the document was processed as.
    pub chunk_count: usize,
}
