//! Fuzz target for the field redactor.
//!
//! Feeds arbitrary text through `redact` with the default config and
//! checks the core laws hold: no panic, idempotence, and the empty-set
//! no-op.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pd_redact::{redact, RedactionConfig, SensitiveFieldSet};

fuzz_target!(|text: &str| {
    let config = RedactionConfig::default();

    let once = redact(&config.fields, &config.token, text, &config.separator);
    let twice = redact(&config.fields, &config.token, &once, &config.separator);
    assert_eq!(once, twice, "redaction must be idempotent");

    let empty = SensitiveFieldSet::empty();
    let noop = redact(&empty, &config.token, text, &config.separator);
    assert_eq!(noop, text, "empty field set must be a no-op");
});
