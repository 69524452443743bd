//! Batch processing of a message corpus directory

use crate::encoding::decode_text;
use crate::error::Result;
use crate::extractor::extract_fields;
use crate::normalize::{normalize, normalize_legacy};
use crate::tokenize::Tokenizer;
use crate::vocab::Vocabulary;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Options controlling how corpus files are processed
#[derive(Debug, Clone, Copy, Default)]
pub struct CorpusOptions {
    /// Use the legacy whole-file pipeline instead of structured extraction
    pub legacy: bool,
}

/// Outcome of one corpus run
#[derive(Debug, Serialize)]
pub struct CorpusReport {
    /// Files processed into a token stream
    pub readable: usize,

    /// Files skipped because they could not be read, parsed or decoded
    pub unreadable: usize,

    /// Paths of the skipped files
    pub failed: Vec<PathBuf>,

    /// Frequency counts over all readable files
    pub vocabulary: Vocabulary,
}

/// Process every message file in `dir`, folding token streams into one
/// vocabulary.
///
/// Subdirectories are skipped. A file that fails to read, parse or decode
/// is logged, counted as unreadable and recorded; the run continues. Only
/// failure to enumerate the directory itself propagates.
pub fn process_directory(dir: &Path, options: CorpusOptions) -> std::io::Result<CorpusReport> {
    let tokenizer = Tokenizer::new();
    let mut report = CorpusReport {
        readable: 0,
        unreadable: 0,
        failed: Vec::new(),
        vocabulary: Vocabulary::new(),
    };

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| !path.is_dir())
        .collect();
    paths.sort();

    for path in paths {
        match process_file(&path, options, &tokenizer) {
            Ok(tokens) => {
                report.readable += 1;
                report.vocabulary.add_tokens(tokens);
            }
            Err(err) => {
                warn!("Skipping unreadable file {}: {err}", path.display());
                report.unreadable += 1;
                report.failed.push(path);
            }
        }
    }

    debug!(
        "Corpus done: {} readable, {} unreadable, {} distinct tokens",
        report.readable,
        report.unreadable,
        report.vocabulary.distinct()
    );

    Ok(report)
}

fn process_file(path: &Path, options: CorpusOptions, tokenizer: &Tokenizer) -> Result<Vec<String>> {
    let raw = fs::read(path)?;

    let normalized = if options.legacy {
        normalize_legacy(&decode_text(&raw)?)
    } else {
        normalize(&extract_fields(&raw)?.combined())
    };

    Ok(tokenizer.tokenize(&normalized))
}
