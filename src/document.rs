// src/document.rs
//! Resume text extraction from uploaded documents.

use anyhow::{anyhow, Context, Result};

/// Returns true when either the content type or the file name marks a PDF.
pub fn is_pdf(file_name: Option<&str>, content_type_is_pdf: bool) -> bool {
    content_type_is_pdf
        || file_name.map_or(false, |name| name.to_lowercase().ends_with(".pdf"))
}

/// PDFs go through text extraction on a blocking thread; anything else is
/// decoded as UTF-8 with invalid sequences replaced.
pub async fn extract_resume_text(bytes: Vec<u8>, pdf: bool) -> Result<String> {
    if !pdf {
        return Ok(decode_lossy(&bytes));
    }

    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .context("PDF extraction task failed")?
        .map_err(|e| anyhow!("Failed to read PDF: {}", e))
}

fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
