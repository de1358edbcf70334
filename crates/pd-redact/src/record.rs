//! Serialization of source records into redactable text.

/// Join `(field, value)` pairs into `field=value` text with `separator`.
///
/// This is the serialization step between the source record feed and the
/// logger: the resulting string is what the redactor scans. Values must
/// not contain the separator; that is the caller's accepted limitation
/// and is not validated here.
pub fn join_record<'a, I>(pairs: I, separator: &str) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    for (i, (field, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(field);
        out.push('=');
        out.push_str(value);
    }
    out
}
