//! Document intake pipeline: chunking, prompt construction, and generation
//! orchestration.

pub mod chunking;
pub mod prompts;
mod service;
pub mod types;

pub use chunking::DEFAULT_CHUNK_MAX_WORDS;
pub use prompts::Language;
pub use service::{IntakeApi, IntakeService};
pub use types::{ChunkingError, IntakeError, SummaryOutcome, UploadOutcome};
