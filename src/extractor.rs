//! Message extraction: raw bytes to structured fields

use crate::error::{ExtractError, Result};
use crate::fields::{MessageFields, NO_SUBJECT, UNKNOWN_RECIPIENT, UNKNOWN_SENDER};
use tracing::debug;

/// Parse one raw message into its subject, sender, recipient and body.
///
/// Header lookups are case-insensitive and fall back to the sentinel
/// placeholders when the header is absent. The body is chosen by a fixed
/// preference: the first `text/plain` part, else the first `text/html`
/// part kept as raw markup, else the empty string. Non-text leaf parts
/// (attachments) are ignored.
pub fn extract_fields(raw: &[u8]) -> Result<MessageFields> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| ExtractError::Structure(e.to_string()))?;

    let subject = header_or(&parsed.headers, "subject", NO_SUBJECT);
    let from = header_or(&parsed.headers, "from", UNKNOWN_SENDER);
    let to = header_or(&parsed.headers, "to", UNKNOWN_RECIPIENT);
    let body = extract_body(&parsed)?;

    debug!("Extracted message: {subject} from {from}");

    Ok(MessageFields {
        subject,
        from,
        to,
        body: body.trim().to_string(),
    })
}

fn header_or(headers: &[mailparse::MailHeader], name: &str, default: &str) -> String {
    headers
        .iter()
        .find(|h| h.get_key().to_lowercase() == name)
        .map_or_else(|| default.to_string(), mailparse::MailHeader::get_value)
}

fn extract_body(parsed: &mailparse::ParsedMail) -> Result<String> {
    let mut text: Option<String> = None;
    let mut html: Option<String> = None;
    collect_text_parts(parsed, &mut text, &mut html)?;

    Ok(text.or(html).unwrap_or_default())
}

fn collect_text_parts(
    part: &mailparse::ParsedMail,
    text: &mut Option<String>,
    html: &mut Option<String>,
) -> Result<()> {
    if part.subparts.is_empty() {
        let content_type = part.ctype.mimetype.to_lowercase();

        if content_type.contains("text/html") {
            if html.is_none() {
                *html = Some(decode_part(part)?);
            }
        } else if content_type.contains("text/") && text.is_none() {
            *text = Some(decode_part(part)?);
        }
    } else {
        for sub in &part.subparts {
            collect_text_parts(sub, text, html)?;
        }
    }

    Ok(())
}

fn decode_part(part: &mailparse::ParsedMail) -> Result<String> {
    part.get_body()
        .map_err(|e| ExtractError::Decode(e.to_string()))
}
