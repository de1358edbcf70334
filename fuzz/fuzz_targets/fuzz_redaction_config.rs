//! Fuzz target for redaction config parsing.
//!
//! Tests that JSON config parsing handles arbitrary input without
//! panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pd_redact::RedactionConfig;

fuzz_target!(|data: &[u8]| {
    // Try to parse as JSON - should never panic, only return an error
    if let Ok(config) = serde_json::from_slice::<RedactionConfig>(data) {
        let _ = config.validate();
    }
});
