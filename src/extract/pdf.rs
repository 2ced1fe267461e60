//! PDF text extraction.

use super::ExtractionError;

pub(super) fn extract(data: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(data).map_err(|error| {
        ExtractionError::ExtractionFailed(format!("failed to extract PDF text: {error}"))
    })
}
