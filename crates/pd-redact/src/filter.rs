//! The field redactor: a one-pass matcher over `field=value` text.
//!
//! Text is tokenized on the separator, and within each segment the key
//! immediately preceding an `=` is matched against the sensitive set.
//! A matched key keeps its name and the `=`; the value (everything up to
//! the next separator) is replaced by the token.

use crate::fields::SensitiveFieldSet;

/// Replace the values of sensitive fields in `text` with `token`.
///
/// `text` is expected to contain zero or more `field=value` pairs delimited
/// by `separator`, possibly surrounded by free text (a rendered log line's
/// timestamp/level prefix, for example). Anything that is not the value of
/// a sensitive field passes through unmodified.
///
/// Deterministic and side-effect free; `redact(∅, ..) == text` and
/// redacting an already-redacted string is a fixed point as long as the
/// token does not contain the separator.
pub fn redact(fields: &SensitiveFieldSet, token: &str, text: &str, separator: &str) -> String {
    if text.is_empty() || fields.is_empty() || separator.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut first = true;
    for segment in text.split(separator) {
        if !first {
            out.push_str(separator);
        }
        first = false;
        redact_segment(&mut out, segment, fields, token);
    }
    out
}

/// Append `segment` to `out`, redacting its value if its key is sensitive.
///
/// The key is the run of identifier characters directly before an `=`; free
/// text before the key (e.g. `2026-08-30 INFO user_data: `) is preserved.
/// Scanning every `=` in the segment keeps the original "every occurrence"
/// contract for malformed input that packs several pairs into one segment.
fn redact_segment(out: &mut String, segment: &str, fields: &SensitiveFieldSet, token: &str) {
    for (eq, _) in segment.match_indices('=') {
        let prefix = &segment[..eq];
        let key_start = match prefix.rfind(|c: char| !is_key_char(c)) {
            Some(p) => p + prefix[p..].chars().next().map_or(1, char::len_utf8),
            None => 0,
        };
        let key = &prefix[key_start..];
        if !key.is_empty() && fields.contains(key) {
            // The value is the rest of the segment: any run of
            // non-separator characters, including further `=`.
            out.push_str(&segment[..=eq]);
            out.push_str(token);
            return;
        }
    }
    out.push_str(segment);
}

/// Characters that may appear in a field name.
fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
