//! Document text extraction for uploaded PDFs.
//!
//! Extraction fails soft: any decode error becomes an empty string, which callers
//! treat as "could not extract".

use std::panic::{self, AssertUnwindSafe};

use tracing::{error, info};

/// Upper bound on extracted text, in characters. Longer text keeps its prefix.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Converts raw document bytes into length-capped plain text.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`; implementations must never panic.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> String;
}

/// `pdf-extract` backed extractor. Pages are concatenated in document order.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> String {
        // pdf-extract can panic on some malformed streams
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));

        match result {
            Ok(Ok(text)) => truncate_text(text),
            Ok(Err(e)) => {
                error!("Error extracting text from PDF: {e}");
                String::new()
            }
            Err(_) => {
                error!("Error extracting text from PDF: decoder panicked");
                String::new()
            }
        }
    }
}

/// Caps `text` at `MAX_TEXT_LENGTH` characters, logging the outcome.
pub fn truncate_text(text: String) -> String {
    match text.char_indices().nth(MAX_TEXT_LENGTH) {
        Some((cut, _)) => {
            info!(
                "Original text length ({}) exceeds limit. Truncating.",
                text.chars().count()
            );
            let mut text = text;
            text.truncate(cut);
            text
        }
        None => {
            info!("Extracted text length: {} characters.", text.chars().count());
            text
        }
    }
}
