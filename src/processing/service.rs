//! Intake service coordinating extraction, chunking, generation, and storage.

use crate::{
    config::get_config,
    extract::{self, FileKind},
    generation::{GeminiClient, GenerationClient},
    metrics::{IntakeMetrics, MetricsSnapshot},
    processing::{
        chunking::{DEFAULT_CHUNK_MAX_WORDS, chunk_words, word_count},
        prompts::{self, Language},
        types::{IntakeError, SummaryOutcome, UploadOutcome},
    },
    store::{DocumentMetadata, DocumentStore, DocumentSummary, MemoryStore},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Coordinates the full intake pipeline: extraction, word chunking,
/// generation calls, and document storage.
///
/// The service owns long-lived handles to the generation client, the
/// document store, and the metrics registry. Construct it once near process
/// start and share it through an `Arc`.
pub struct IntakeService {
    generation: Box<dyn GenerationClient>,
    store: Arc<dyn DocumentStore>,
    metrics: Arc<IntakeMetrics>,
    chunk_max_words: usize,
    ocr_languages: String,
}

/// Abstraction over the intake pipeline used by the HTTP surface.
#[async_trait]
pub trait IntakeApi: Send + Sync {
    /// Extract text from an uploaded file, store it, and summarize it.
    async fn ingest_file(
        &self,
        filename: String,
        language: Language,
        data: Vec<u8>,
    ) -> Result<UploadOutcome, IntakeError>;

    /// Summarize pasted text without storing it.
    async fn summarize_text(
        &self,
        text: &str,
        language: Language,
    ) -> Result<SummaryOutcome, IntakeError>;

    /// Answer a question against a previously stored document.
    async fn answer_for_document(
        &self,
        document_id: Uuid,
        question: &str,
        language: Language,
    ) -> Result<String, IntakeError>;

    /// Answer a question against ad-hoc text.
    async fn answer_for_text(
        &self,
        text: &str,
        question: &str,
        language: Language,
    ) -> Result<String, IntakeError>;

    /// List stored documents for display.
    async fn list_documents(&self) -> Vec<DocumentSummary>;

    /// Retrieve the current metrics snapshot for diagnostics.
    fn metrics_snapshot(&self) -> MetricsSnapshot;
}

impl IntakeService {
    /// Build the production service from the loaded configuration.
    pub fn new() -> Self {
        let config = get_config();
        tracing::info!(model = %config.gemini_model, "Initializing generation client");
        Self::with_parts(
            Box::new(GeminiClient::from_config()),
            Arc::new(MemoryStore::new()),
            config.chunk_max_words.unwrap_or(DEFAULT_CHUNK_MAX_WORDS),
            config.ocr_languages.clone(),
        )
    }

    /// Assemble a service from explicit collaborators, used by tests to
    /// substitute a stub generation client or a fake store.
    pub fn with_parts(
        generation: Box<dyn GenerationClient>,
        store: Arc<dyn DocumentStore>,
        chunk_max_words: usize,
        ocr_languages: String,
    ) -> Self {
        Self {
            generation,
            store,
            metrics: Arc::new(IntakeMetrics::new()),
            chunk_max_words,
            ocr_languages,
        }
    }

    /// Summarize document text, chunking when it exceeds the word budget.
    ///
    /// Documents fitting a single chunk get one full-analysis call. Larger
    /// documents are summarized chunk by chunk, strictly in order, and the
    /// ordered summaries are combined by one synthesis call whose output is
    /// returned verbatim. The first failed generation call aborts the whole
    /// operation; no call is issued for later chunks or for synthesis.
    pub async fn summarize_text(
        &self,
        text: &str,
        language: Language,
    ) -> Result<SummaryOutcome, IntakeError> {
        if text.trim().is_empty() {
            return Err(IntakeError::Validation(
                "No document text provided".to_string(),
            ));
        }

        let chunks = chunk_words(text, self.chunk_max_words)?;
        let chunk_count = chunks.len();

        let summary = if chunk_count <= 1 {
            let prompt = prompts::analysis_prompt(language, text);
            self.generation.generate(&prompt).await?
        } else {
            tracing::info!(
                words = word_count(text),
                chunks = chunk_count,
                "Processing oversized document"
            );
            let mut summaries = Vec::with_capacity(chunk_count);
            for (index, chunk) in chunks.iter().enumerate() {
                let part = index + 1;
                tracing::debug!(part, total = chunk_count, "Summarizing chunk");
                let prompt = prompts::chunk_prompt(language, part, chunk_count, chunk);
                summaries.push(self.generation.generate(&prompt).await?);
            }
            let prompt = prompts::synthesis_prompt(language, &summaries);
            self.generation.generate(&prompt).await?
        };

        self.metrics.record_document(chunk_count as u64);
        tracing::info!(
            chunks = chunk_count,
            language = language.as_str(),
            "Document summarized"
        );

        Ok(SummaryOutcome {
            summary,
            chunk_count,
        })
    }

    /// Extract, validate, store, and summarize an uploaded file.
    pub async fn ingest_file(
        &self,
        filename: String,
        language: Language,
        data: Vec<u8>,
    ) -> Result<UploadOutcome, IntakeError> {
        let kind = FileKind::from_filename(&filename).ok_or_else(|| {
            IntakeError::Extraction(crate::extract::ExtractionError::UnsupportedType(
                filename.clone(),
            ))
        })?;

        tracing::info!(filename = %filename, kind = ?kind, bytes = data.len(), "Extracting uploaded file");
        let text = extract::extract_text(kind, data, &self.ocr_languages).await?;

        if text.trim().is_empty() {
            return Err(IntakeError::Validation(
                "No text could be extracted from the file. Please ensure the document \
                 contains readable text."
                    .to_string(),
            ));
        }

        let document_id = self
            .store
            .put(
                text.clone(),
                DocumentMetadata {
                    filename: filename.clone(),
                    language,
                },
            )
            .await;
        tracing::info!(document_id = %document_id, filename = %filename, "Document stored");

        let outcome = self.summarize_text(&text, language).await?;

        Ok(UploadOutcome {
            document_id,
            filename,
            summary: outcome.summary,
            chunk_count: outcome.chunk_count,
        })
    }

    /// Answer a question against a stored document.
    pub async fn answer_for_document(
        &self,
        document_id: Uuid,
        question: &str,
        language: Language,
    ) -> Result<String, IntakeError> {
        if question.trim().is_empty() {
            return Err(IntakeError::Validation("No question provided".to_string()));
        }

        let record = self
            .store
            .get(document_id)
            .await
            .ok_or(IntakeError::NotFound(document_id))?;

        self.answer(question, &record.text, language).await
    }

    /// Answer a question against ad-hoc text.
    pub async fn answer_for_text(
        &self,
        text: &str,
        question: &str,
        language: Language,
    ) -> Result<String, IntakeError> {
        if question.trim().is_empty() {
            return Err(IntakeError::Validation("No question provided".to_string()));
        }
        if text.trim().is_empty() {
            return Err(IntakeError::Validation(
                "No document text provided".to_string(),
            ));
        }

        self.answer(question, text, language).await
    }

    async fn answer(
        &self,
        question: &str,
        document_text: &str,
        language: Language,
    ) -> Result<String, IntakeError> {
        let prompt = prompts::question_prompt(language, question, document_text);
        let answer = self.generation.generate(&prompt).await?;
        self.metrics.record_question();
        Ok(answer)
    }

    /// List stored documents for display.
    pub async fn list_documents(&self) -> Vec<DocumentSummary> {
        self.store.list().await
    }

    /// Return the current intake metrics snapshot.
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

#[async_trait]
impl IntakeApi for IntakeService {
    async fn ingest_file(
        &self,
        filename: String,
        language: Language,
        data: Vec<u8>,
    ) -> Result<UploadOutcome, IntakeError> {
        IntakeService::ingest_file(self, filename, language, data).await
    }

    async fn summarize_text(
        &self,
        text: &str,
        language: Language,
    ) -> Result<SummaryOutcome, IntakeError> {
        IntakeService::summarize_text(self, text, language).await
    }

    async fn answer_for_document(
        &self,
        document_id: Uuid,
        question: &str,
        language: Language,
    ) -> Result<String, IntakeError> {
        IntakeService::answer_for_document(self, document_id, question, language).await
    }

    async fn answer_for_text(
        &self,
        text: &str,
        question: &str,
        language: Language,
    ) -> Result<String, IntakeError> {
        IntakeService::answer_for_text(self, text, question, language).await
    }

    async fn list_documents(&self) -> Vec<DocumentSummary> {
        IntakeService::list_documents(self).await
    }

    fn metrics_snapshot(&self) -> MetricsSnapshot {
        IntakeService::metrics_snapshot(self)
    }
}
