//! The redacting event format.
//!
//! `RedactingFormat` decorates a base [`FormatEvent`] implementation: the
//! record is first rendered in full (timestamp, level, target, message)
//! into an intermediate buffer, then the redactor runs over the entire
//! rendered line, and only the redacted text reaches the real writer.
//! An injected value can therefore never escape redaction by exploiting
//! formatting order, and a failed base render writes nothing at all.

use pd_redact::{redact, RedactionConfig};
use std::fmt::{self, Write as _};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{Format, Full, Writer};
use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// A [`FormatEvent`] decorator that redacts the fully rendered line.
///
/// The configuration is captured at construction and never mutated; one
/// instance may be shared by concurrent logging calls.
pub struct RedactingFormat<F = Format<Full, SystemTime>> {
    inner: F,
    config: RedactionConfig,
}

impl RedactingFormat {
    /// Wrap the default full-line format (timestamp, level, target).
    pub fn new(config: RedactionConfig) -> Self {
        Self {
            inner: Format::default(),
            config,
        }
    }
}

impl<F> RedactingFormat<F> {
    /// Wrap an arbitrary base format.
    pub fn wrapping(inner: F, config: RedactionConfig) -> Self {
        Self { inner, config }
    }

    /// The redaction settings this formatter applies.
    pub fn config(&self) -> &RedactionConfig {
        &self.config
    }
}

impl<S, N, F> FormatEvent<S, N> for RedactingFormat<F>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    F: FormatEvent<S, N>,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        // Render through the base format first; on failure nothing is
        // emitted, so a malformed record cannot leak unredacted text.
        let mut line = String::new();
        self.inner.format_event(ctx, Writer::new(&mut line), event)?;

        // The base format terminates the line. Keep the terminator out of
        // the scan so a redacted final value does not swallow it.
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line.as_str(), ""),
        };

        let redacted = redact(
            &self.config.fields,
            &self.config.token,
            body,
            &self.config.separator,
        );
        writer.write_str(&redacted)?;
        writer.write_str(newline)
    }
}
