//! Redacting log formatter and the `user_data` channel.
//!
//! Wires the field redactor from `pd-redact` into the `tracing` formatting
//! lifecycle: every record emitted through the channel is rendered in full
//! and then redacted before it reaches the output writer.
//!
//! # Example
//!
//! ```
//! use pd_logger::UserDataLogger;
//! use pd_redact::RedactionConfig;
//!
//! let logger = UserDataLogger::new(RedactionConfig::default());
//! // Emits: "... INFO user_data: name=***;email=***" on stderr.
//! logger.info("name=Alice;email=alice@example.com");
//! ```

pub mod format;
pub mod logger;

pub use format::RedactingFormat;
pub use logger::{get, init, init_from_env, UserDataLogger, CHANNEL_NAME};
