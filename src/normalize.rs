//! Pattern-based normalization of message text
//!
//! An ordered chain of substitutions collapses high-cardinality fields
//! (addresses, URLs, dates, money, IPs, digit runs) into fixed placeholder
//! tokens before casing and punctuation cleanup. The order is significant:
//! structural patterns must win before the bare digit-run rule destroys
//! them, and the digit rules must run before punctuation removal merges
//! adjacent runs.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w\.-]+@[\w\.-]+\.\w+\b").unwrap());

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:http|https)://[^\s]*").unwrap());

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}:\d{1,2}(?::\d{1,2})?\b").unwrap());

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").unwrap());

static DOLLAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\d+(?:,\d+)*(?:\.\d+)?").unwrap());

static WWW_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bwww\.[^\s]*\b").unwrap());

static PERCENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+%").unwrap());

static IP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b").unwrap());

static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\b").unwrap());

// Line-leading list markers ("1.", "a)", "x-") and Unicode bullets.
static ITEMIZATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\w[.)\-]\s*|[\u{2022}\u{2219}\u{25CB}\u{00B7}]\s*").unwrap());

static HTML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>\n]*>").unwrap());

static NUMBER_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:number)+").unwrap());

static LONG_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w{30,}\b").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// The fixed ASCII punctuation set; locale-independent.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Placeholder substituted for email addresses
pub const EMAIL_TOKEN: &str = "emailaddr";

/// Placeholder substituted for `http(s)://` URLs
pub const URL_TOKEN: &str = "httpaddr";

/// Placeholder substituted for time-of-day literals
pub const TIME_TOKEN: &str = "time";

/// Placeholder substituted for date literals
pub const DATE_TOKEN: &str = "date";

/// Placeholder substituted for dollar amounts
pub const DOLLAR_TOKEN: &str = "dollar";

/// Placeholder substituted for `www.` host tokens
pub const WWW_TOKEN: &str = "wwwaddr";

/// Placeholder substituted for percentage literals
pub const PERCENT_TOKEN: &str = "percent";

/// Placeholder substituted for dotted-quad IP literals
pub const IP_TOKEN: &str = "ipaddr";

/// Placeholder substituted for remaining standalone digit runs
pub const NUMBER_TOKEN: &str = "number";

/// Normalize message text extracted through structured parsing.
///
/// Applies the placeholder substitutions in their fixed order, then
/// lowercases, drops punctuation, collapses adjacent `number` placeholders
/// and collapses whitespace. Total over any input; degenerate input yields
/// an empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    cleanup(&substitute(text))
}

/// Normalize whole-file message text through the legacy pipeline.
///
/// The legacy variant predates structured body extraction: it additionally
/// strips HTML-like tags up front and removes words of 30 or more
/// characters at the end. Kept alongside [`normalize`] because the two
/// variants document different corpus-cleanup policies.
#[must_use]
pub fn normalize_legacy(text: &str) -> String {
    let stripped = HTML_TAG_REGEX.replace_all(text, "");
    let cleaned = cleanup(&substitute(&stripped));
    let pruned = LONG_WORD_REGEX.replace_all(&cleaned, "");

    WHITESPACE_REGEX.replace_all(&pruned, " ").trim().to_string()
}

/// Placeholder substitutions, in their significant order. Structural
/// patterns (addresses, URLs, times, dates, money, hosts, percentages,
/// IPs) run before the bare digit-run rule so an IP is one `ipaddr`, not
/// four `number`s.
fn substitute(text: &str) -> String {
    let text = EMAIL_REGEX.replace_all(text, EMAIL_TOKEN);
    let text = URL_REGEX.replace_all(&text, URL_TOKEN);
    let text = TIME_REGEX.replace_all(&text, TIME_TOKEN);
    let text = DATE_REGEX.replace_all(&text, DATE_TOKEN);
    let text = DOLLAR_REGEX.replace_all(&text, DOLLAR_TOKEN);
    let text = WWW_REGEX.replace_all(&text, WWW_TOKEN);
    let text = PERCENT_REGEX.replace_all(&text, PERCENT_TOKEN);
    let text = IP_REGEX.replace_all(&text, IP_TOKEN);
    let text = NUMBER_REGEX.replace_all(&text, NUMBER_TOKEN);
    let text = ITEMIZATION_REGEX.replace_all(&text, "");

    text.into_owned()
}

/// Casing and whitespace cleanup after substitution. The `=` replacement
/// handles quoted-printable remnants; adjacent `number` placeholders merge
/// only after punctuation removal joins them.
fn cleanup(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced = lowered.replace('=', " ");
    let stripped: String = spaced.chars().filter(|c| !PUNCTUATION.contains(*c)).collect();
    let collapsed = NUMBER_RUN_REGEX.replace_all(&stripped, NUMBER_TOKEN);
    let flattened = collapsed.replace(['\n', '\t'], " ");

    WHITESPACE_REGEX
        .replace_all(&flattened, " ")
        .trim()
        .to_string()
}
