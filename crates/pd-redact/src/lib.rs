//! Field-level PII redaction for personal-data logging.
//!
//! This crate is the core of the redaction pipeline: a declarative matcher
//! that scans `field=value` text joined by a separator and replaces the
//! values of designated sensitive fields with a fixed redaction token.
//!
//! # Key Properties
//!
//! - **Exact key matching**: a field name that is a prefix of another
//!   (`name` vs `namespace`) can never mis-match, because keys are matched
//!   by set membership rather than pattern alternation.
//! - **Pure**: `redact` is a deterministic function of its inputs with no
//!   side effects, safe to call concurrently without locking.
//! - **Pass-through**: text outside `field=value` shape, and the values of
//!   fields not in the sensitive set, are left byte-identical.
//!
//! # Example
//!
//! ```
//! use pd_redact::{redact, RedactionConfig};
//!
//! let config = RedactionConfig::default();
//! let line = "name=Alice;email=alice@example.com;last_login=2019-11-14";
//! let out = redact(&config.fields, &config.token, line, &config.separator);
//! assert_eq!(out, "name=***;email=***;last_login=2019-11-14");
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod filter;
pub mod record;

pub use config::RedactionConfig;
pub use error::{RedactError, Result};
pub use fields::{SensitiveFieldSet, PII_FIELDS};
pub use filter::redact;
pub use record::join_record;

/// Default replacement string for sensitive values.
pub const DEFAULT_REDACTION_TOKEN: &str = "***";

/// Default delimiter between consecutive `field=value` pairs.
pub const DEFAULT_SEPARATOR: &str = ";";
