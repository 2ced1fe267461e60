//! Image OCR through the Tesseract CLI.
//!
//! Images of legal documents are handed to the `tesseract` binary with a
//! recognized-language hint (Tamil plus English by default). A missing
//! binary is reported as a distinct, user-actionable condition rather than a
//! generic failure.

use super::ExtractionError;
use std::io::Write;
use tokio::process::Command;

pub(super) async fn extract(data: &[u8], languages: &str) -> Result<String, ExtractionError> {
    let mut image_file = tempfile::NamedTempFile::new().map_err(|error| {
        ExtractionError::ExtractionFailed(format!("failed to create temp file: {error}"))
    })?;
    image_file.write_all(data).map_err(|error| {
        ExtractionError::ExtractionFailed(format!("failed to write temp file: {error}"))
    })?;

    let output = Command::new("tesseract")
        .arg(image_file.path())
        .arg("stdout")
        .arg("-l")
        .arg(languages)
        .output()
        .await;

    let output = match output {
        Ok(output) => output,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Err(ExtractionError::OcrUnavailable(
                "tesseract binary not found on PATH".to_string(),
            ));
        }
        Err(error) => {
            return Err(ExtractionError::ExtractionFailed(format!(
                "failed to run tesseract: {error}"
            )));
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExtractionError::ExtractionFailed(format!(
            "tesseract exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
