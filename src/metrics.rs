use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters describing intake activity.
#[derive(Default)]
pub struct IntakeMetrics {
    documents_processed: AtomicU64,
    chunks_summarized: AtomicU64,
    questions_answered: AtomicU64,
    last_chunk_count: AtomicU64,
}

impl IntakeMetrics {
    /// Create an empty metrics accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a summarized document and the number of chunks it produced.
    pub fn record_document(&self, chunk_count: u64) {
        self.documents_processed.fetch_add(1, Ordering::Relaxed);
        self.chunks_summarized
            .fetch_add(chunk_count, Ordering::Relaxed);
        self.last_chunk_count.store(chunk_count, Ordering::Relaxed);
    }

    /// Record an answered question.
    pub fn record_question(&self) {
        self.questions_answered.fetch_add(1, Ordering::Relaxed);
    }

    /// Return a snapshot of the current counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let documents_processed = self.documents_processed.load(Ordering::Relaxed);
        MetricsSnapshot {
            documents_processed,
            chunks_summarized: self.chunks_summarized.load(Ordering::Relaxed),
            questions_answered: self.questions_answered.load(Ordering::Relaxed),
            last_chunk_count: (documents_processed > 0)
                .then(|| self.last_chunk_count.load(Ordering::Relaxed)),
        }
    }
}

/// Immutable view of intake counters used for reporting.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct MetricsSnapshot {
    /// Number of documents summarized since startup.
    pub documents_processed: u64,
    /// Total chunk count processed across all documents.
    pub chunks_summarized: u64,
    /// Number of question-answer calls completed.
    pub questions_answered: u64,
    /// Chunk count of the most recently processed document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_chunk_count: Option<u64>,
}
