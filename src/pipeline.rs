//! End-to-end per-message pipelines
//!
//! Each invocation is independent and side-effect free: extraction (or
//! decoding), normalization and tokenization run start to finish on one
//! message with no cross-call state.

use crate::error::Result;
use crate::extractor::extract_fields;
use crate::normalize::{normalize, normalize_legacy};
use crate::tokenize::Tokenizer;

/// Run the structured pipeline on one raw message: parse header and body,
/// normalize the concatenated fields, tokenize and stem.
pub fn process_message(raw: &[u8]) -> Result<Vec<String>> {
    let fields = extract_fields(raw)?;
    let normalized = normalize(&fields.combined());

    Ok(Tokenizer::new().tokenize(&normalized))
}

/// Run the legacy pipeline on already-decoded whole-file text. Total over
/// any input.
#[must_use]
pub fn process_text_legacy(text: &str) -> Vec<String> {
    Tokenizer::new().tokenize(&normalize_legacy(text))
}

/// Legacy pipeline, space-joined single-string form
#[must_use]
pub fn process_text_legacy_joined(text: &str) -> String {
    Tokenizer::new().tokenize_joined(&normalize_legacy(text))
}
