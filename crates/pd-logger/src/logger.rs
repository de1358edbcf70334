//! The `user_data` logger channel.
//!
//! The channel owns a private [`Dispatch`] built around the redacting
//! format: events emitted through it never reach the global subscriber,
//! so a differently configured root logger cannot re-render (and leak)
//! the unredacted record. Exactly one handler is attached, so redaction
//! runs exactly once per record.

use crate::format::RedactingFormat;
use pd_redact::{RedactionConfig, Result};
use std::io;
use std::sync::OnceLock;
use tracing::{dispatcher, Dispatch, Level};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::MakeWriter;

/// Name of the channel, used as the event target.
pub const CHANNEL_NAME: &str = "user_data";

static CHANNEL: OnceLock<UserDataLogger> = OnceLock::new();

/// A non-propagating logging channel with a redacting formatter.
pub struct UserDataLogger {
    dispatch: Dispatch,
}

impl UserDataLogger {
    /// Build a channel writing redacted lines to stderr.
    pub fn new(config: RedactionConfig) -> Self {
        Self::with_writer(config, io::stderr as fn() -> io::Stderr)
    }

    /// Build a channel with an explicit writer (used by tests and by
    /// callers that route log output elsewhere).
    pub fn with_writer<W>(config: RedactionConfig, writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let subscriber = fmt::Subscriber::builder()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .event_format(RedactingFormat::new(config))
            .with_writer(writer)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Emit an informational record through the redaction pipeline.
    pub fn info(&self, message: &str) {
        self.emit(Level::INFO, message);
    }

    /// Emit a warning record through the redaction pipeline.
    pub fn warn(&self, message: &str) {
        self.emit(Level::WARN, message);
    }

    /// Emit an error record through the redaction pipeline.
    pub fn error(&self, message: &str) {
        self.emit(Level::ERROR, message);
    }

    /// Emit a debug record. The channel's INFO floor discards it; the
    /// method exists so callers do not need level-dependent plumbing.
    pub fn debug(&self, message: &str) {
        self.emit(Level::DEBUG, message);
    }

    fn emit(&self, level: Level, message: &str) {
        // Events fire against the channel's own dispatch only; the global
        // default never sees them (no propagation to ancestor channels).
        dispatcher::with_default(&self.dispatch, || {
            if level == Level::ERROR {
                tracing::error!(target: CHANNEL_NAME, "{message}");
            } else if level == Level::WARN {
                tracing::warn!(target: CHANNEL_NAME, "{message}");
            } else if level == Level::INFO {
                tracing::info!(target: CHANNEL_NAME, "{message}");
            } else if level == Level::DEBUG {
                tracing::debug!(target: CHANNEL_NAME, "{message}");
            } else {
                tracing::trace!(target: CHANNEL_NAME, "{message}");
            }
        });
    }
}

/// Install the process-wide `user_data` channel with an explicit config.
///
/// Memoized: the first caller wins. A second call with a different config
/// reports the conflict on the existing channel and returns it unchanged,
/// guaranteeing at most one handler (and one redaction pass) per record.
pub fn init(config: RedactionConfig) -> &'static UserDataLogger {
    let mut installed = false;
    let logger = CHANNEL.get_or_init(|| {
        installed = true;
        UserDataLogger::new(config)
    });
    if !installed {
        logger.warn("user_data channel already initialized; keeping existing configuration");
    }
    logger
}

/// Install the channel from environment overrides, propagating any
/// configuration error to the caller. There is no fallback channel.
pub fn init_from_env() -> Result<&'static UserDataLogger> {
    Ok(init(RedactionConfig::from_env()?))
}

/// The process-wide `user_data` channel, created with the default config
/// on first use.
pub fn get() -> &'static UserDataLogger {
    CHANNEL.get_or_init(|| UserDataLogger::new(RedactionConfig::default()))
}
