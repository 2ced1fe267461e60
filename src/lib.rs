#![deny(missing_docs)]

//! Core library for the Legalens document analysis server.

/// HTTP routing and REST handlers.
pub mod api;
/// Environment-driven configuration management.
pub mod config;
/// Text extraction from uploaded files (PDF, DOCX, images via OCR).
pub mod extract;
/// Generation client abstraction and the Gemini adapter.
pub mod generation;
/// Structured logging and tracing setup.
pub mod logging;
/// Intake metrics helpers.
pub mod metrics;
/// Document intake pipeline: chunking, prompts, and orchestration.
pub mod processing;
/// Built-in sample legal documents.
pub mod samples;
/// Document storage behind the [`store::DocumentStore`] trait.
pub mod store;
