//! Byte-to-text decoding for the legacy whole-file pipeline
//!
//! Encoding is detected from a bounded prefix only, so a pathological
//! file cannot make detection unboundedly expensive. The structured
//! pipeline never calls this; `mailparse` handles per-part charsets.

use crate::error::{ExtractError, Result};
use std::borrow::Cow;

// Detection reads at most this many bytes.
const SNIFF_LIMIT: usize = 8 * 1024;

/// Decode raw message bytes into text.
///
/// A NUL byte in the sniffed prefix marks the file as binary and fails
/// with [`ExtractError::Encoding`]. Otherwise the prefix picks between
/// strict UTF-8 and a strict windows-1252 fallback for the full input.
pub fn decode_text(raw: &[u8]) -> Result<String> {
    let prefix = &raw[..raw.len().min(SNIFF_LIMIT)];

    if prefix.contains(&0) {
        return Err(ExtractError::Encoding(
            "binary content (NUL byte)".to_string(),
        ));
    }

    let looks_utf8 = match std::str::from_utf8(prefix) {
        Ok(_) => true,
        // error_len() is None when a multi-byte sequence is cut at the
        // prefix edge, which is not evidence against UTF-8.
        Err(e) => e.error_len().is_none(),
    };

    if looks_utf8
        && let Some(text) = encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(raw)
    {
        return Ok(text.into_owned());
    }

    encoding_rs::WINDOWS_1252
        .decode_without_bom_handling_and_without_replacement(raw)
        .map(Cow::into_owned)
        .ok_or_else(|| ExtractError::Encoding("undecodable byte sequence".to_string()))
}
