//! DOCX text extraction.
//!
//! A `.docx` file is a zip archive whose main body lives in
//! `word/document.xml`. Text nodes are collected in document order and
//! paragraph ends become newlines, which is enough structure for prompt
//! construction downstream.

use super::ExtractionError;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Cursor, Read};

pub(super) fn extract(data: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(|error| {
        ExtractionError::ExtractionFailed(format!("failed to open DOCX archive: {error}"))
    })?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|error| {
            ExtractionError::ExtractionFailed(format!(
                "DOCX archive has no document body: {error}"
            ))
        })?
        .read_to_string(&mut xml)
        .map_err(|error| {
            ExtractionError::ExtractionFailed(format!("failed to read DOCX body: {error}"))
        })?;

    parse_document_xml(&xml)
}

fn parse_document_xml(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(node)) => {
                let value = node.unescape().map_err(|error| {
                    ExtractionError::ExtractionFailed(format!(
                        "failed to decode DOCX text node: {error}"
                    ))
                })?;
                text.push_str(&value);
            }
            Ok(Event::Empty(element)) if element.local_name().as_ref() == b"br" => {
                text.push('\n');
            }
            Ok(Event::End(element)) if element.local_name().as_ref() == b"p" => {
                text.push('\n');
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => {
                return Err(ExtractionError::ExtractionFailed(format!(
                    "malformed DOCX XML: {error}"
                )));
            }
        }
    }

    Ok(text)
}
