// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Normalization & Tokenization
//!
//! Turns raw email messages into canonical stemmed token streams for
//! building bag-of-words spam vocabularies.
//!
//! # Pipeline
//!
//! - Structured extraction of subject, sender, recipient and body
//! - An ordered chain of placeholder substitutions (`emailaddr`,
//!   `httpaddr`, `time`, `date`, `dollar`, `wwwaddr`, `percent`,
//!   `ipaddr`, `number`) followed by casing and punctuation cleanup
//! - Whitespace tokenization with Snowball English stemming
//! - A legacy whole-file variant with HTML tag stripping and long-word
//!   removal, kept for backward compatibility
//!
//! # Example
//!
//! ```rust
//! use email_vocab::process_message;
//!
//! let raw = b"From: sender@example.com\r\nSubject: Meeting at 10:30\r\n\r\nRoom 101";
//! let tokens = process_message(raw).unwrap();
//!
//! assert!(tokens.contains(&"emailaddr".to_string()));
//! assert!(tokens.contains(&"time".to_string()));
//! assert!(tokens.contains(&"number".to_string()));
//! ```

mod corpus;
mod encoding;
mod error;
mod extractor;
mod fields;
mod normalize;
mod pipeline;
mod tokenize;
mod vocab;

pub use corpus::{CorpusOptions, CorpusReport, process_directory};
pub use encoding::decode_text;
pub use error::{ExtractError, Result};
pub use extractor::extract_fields;
pub use fields::{MessageFields, NO_SUBJECT, UNKNOWN_RECIPIENT, UNKNOWN_SENDER};
pub use normalize::{normalize, normalize_legacy};
pub use pipeline::{process_message, process_text_legacy, process_text_legacy_joined};
pub use tokenize::Tokenizer;
pub use vocab::Vocabulary;
