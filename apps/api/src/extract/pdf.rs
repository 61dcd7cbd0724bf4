use crate::extract::ExtractError;

/// Extracts text from an in-memory PDF.
///
/// Whitespace runs are collapsed to single spaces, which joins page texts
/// with single-space separators and drops pages that yielded no text
/// (scanned/image-only pages contribute nothing).
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(normalize_whitespace(&raw))
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
