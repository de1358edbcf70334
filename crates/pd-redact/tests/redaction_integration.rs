//! Integration tests for pd-redact.
//!
//! These tests verify:
//! - Canary PII values never survive redaction of a serialized record
//! - The subset law: exactly the chosen fields are redacted, everything
//!   else is byte-identical
//! - Idempotence and the empty-set law under the default config

use pd_redact::{join_record, redact, RedactionConfig, SensitiveFieldSet};

/// PII values that must NEVER appear in redacted output when their field
/// is in the sensitive set.
const CANARY_VALUES: &[(&str, &str)] = &[
    ("name", "Marlene Fitzgerald"),
    ("email", "marlene.fitzgerald@example.com"),
    ("phone", "+1-555-0142"),
    ("ssn", "078-05-1120"),
    ("password", "correct horse battery staple"),
];

/// Fields that are serialized alongside PII but are not sensitive.
const PLAIN_PAIRS: &[(&str, &str)] = &[
    ("ip", "203.0.113.9"),
    ("last_login", "2019-11-14T06:14:24"),
    ("user_agent", "Mozilla/5.0 (compatible)"),
];

fn full_record() -> Vec<(&'static str, &'static str)> {
    CANARY_VALUES
        .iter()
        .chain(PLAIN_PAIRS.iter())
        .copied()
        .collect()
}

#[test]
fn test_canary_values_never_leak() {
    let config = RedactionConfig::default();
    let message = join_record(full_record(), &config.separator);
    let out = redact(&config.fields, &config.token, &message, &config.separator);

    for (field, value) in CANARY_VALUES {
        assert!(
            !out.contains(value),
            "canary value for '{}' leaked in output: {}",
            field,
            out
        );
        assert!(
            out.contains(&format!("{}=***", field)),
            "field '{}' missing its token in output: {}",
            field,
            out
        );
    }
}

#[test]
fn test_subset_law() {
    // Redacting with every possible single-field subset replaces exactly
    // that pair and leaves the others byte-identical.
    let config = RedactionConfig::default();
    let record = full_record();
    let message = join_record(record.clone(), &config.separator);

    for (chosen, _) in CANARY_VALUES {
        let subset = SensitiveFieldSet::new([*chosen]);
        let out = redact(&subset, &config.token, &message, &config.separator);

        for (field, value) in &record {
            let pair = format!("{}={}", field, value);
            if field == chosen {
                assert!(!out.contains(&pair), "'{}' not redacted: {}", field, out);
                assert!(out.contains(&format!("{}=***", field)));
            } else {
                assert!(out.contains(&pair), "'{}' was altered: {}", field, out);
            }
        }
    }
}

#[test]
fn test_empty_set_law() {
    let config = RedactionConfig::default();
    let message = join_record(full_record(), &config.separator);
    let out = redact(
        &SensitiveFieldSet::empty(),
        &config.token,
        &message,
        &config.separator,
    );
    assert_eq!(out, message);
}

#[test]
fn test_idempotence_over_full_record() {
    let config = RedactionConfig::default();
    let message = join_record(full_record(), &config.separator);

    let once = redact(&config.fields, &config.token, &message, &config.separator);
    let twice = redact(&config.fields, &config.token, &once, &config.separator);
    assert_eq!(once, twice);
}

#[test]
fn test_redaction_inside_rendered_line() {
    // The redactor sees whole rendered log lines, not bare messages; the
    // non-pair prefix must survive untouched.
    let config = RedactionConfig::default();
    let message = join_record(full_record(), &config.separator);
    let line = format!("[USER DATA] user_data INFO 2019-11-14 06:14:24: {}", message);

    let out = redact(&config.fields, &config.token, &line, &config.separator);
    assert!(out.starts_with("[USER DATA] user_data INFO 2019-11-14 06:14:24: "));
    for (_, value) in CANARY_VALUES {
        assert!(!out.contains(value), "leak in rendered line: {}", out);
    }
}
