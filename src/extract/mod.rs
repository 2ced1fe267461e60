//! Text extraction from uploaded files.
//!
//! Dispatches on the file kind declared by the upload's filename and hands
//! the bytes to the matching extractor: a PDF text parser, a DOCX archive
//! reader, or the Tesseract OCR engine for images. Extraction is CPU or
//! subprocess work, so it runs off the async runtime under a bounded timeout.

mod docx;
mod ocr;
mod pdf;

use std::time::Duration;
use thiserror::Error;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors produced while extracting text from an uploaded file.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The filename extension does not map to a supported document kind.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    /// The file could not be parsed or the extractor failed.
    #[error("Failed to extract text: {0}")]
    ExtractionFailed(String),
    /// The OCR engine is not installed on this host.
    #[error(
        "Tesseract OCR is not available ({0}). Install Tesseract with Tamil and English \
         language data, or paste the document text instead."
    )]
    OcrUnavailable(String),
}

/// Supported document kinds, derived from the uploaded filename.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// PDF document.
    Pdf,
    /// Word document (`.docx`/`.doc`).
    Docx,
    /// Raster image processed through OCR.
    Image,
}

impl FileKind {
    /// Classify a filename by its extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = filename.rsplit('.').next()?.to_lowercase();
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" | "doc" => Some(Self::Docx),
            "png" | "jpg" | "jpeg" | "gif" | "bmp" => Some(Self::Image),
            _ => None,
        }
    }
}

/// Extract raw text from an uploaded file.
///
/// `ocr_languages` is the recognized-language hint passed to Tesseract for
/// image uploads (e.g. `tam+eng`); the other extractors ignore it.
pub async fn extract_text(
    kind: FileKind,
    data: Vec<u8>,
    ocr_languages: &str,
) -> Result<String, ExtractionError> {
    let work = async {
        match kind {
            FileKind::Pdf => run_blocking(move || pdf::extract(&data)).await,
            FileKind::Docx => run_blocking(move || docx::extract(&data)).await,
            FileKind::Image => ocr::extract(&data, ocr_languages).await,
        }
    };

    tokio::time::timeout(EXTRACTION_TIMEOUT, work)
        .await
        .map_err(|_| ExtractionError::ExtractionFailed("text extraction timed out".to_string()))?
}

async fn run_blocking<F>(work: F) -> Result<String, ExtractionError>
where
    F: FnOnce() -> Result<String, ExtractionError> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|error| ExtractionError::ExtractionFailed(format!("task join error: {error}")))?
}
