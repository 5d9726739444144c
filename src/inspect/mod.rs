//! # Inspector Module
//!
//! Reads JSON Lines event logs and prints one summary line per event.
//!
//! This module handles:
//! - Skipping blank lines and `#` comments
//! - Filling in the configured default source
//! - Building events in strict or lenient mode
//! - Rendering `describe()` output, optionally with a UTC timestamp
//! - Counting accepted and rejected lines

use chrono::SecondsFormat;
use std::collections::BTreeMap;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::config::InspectorConfig;
use crate::error::{JoystickEventError, Result};
use crate::event::{EventKind, JoystickEvent};
use crate::record::{timestamp_utc, EventRecord};

/// Counters collected over one inspection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectSummary {
    /// Lines turned into events
    pub accepted: u64,
    /// Lines that failed to parse or validate
    pub rejected: u64,
    /// Accepted events per kind name
    pub by_kind: BTreeMap<&'static str, u64>,
}

impl InspectSummary {
    fn record(&mut self, kind: EventKind) {
        self.accepted += 1;
        *self.by_kind.entry(kind.name()).or_insert(0) += 1;
    }
}

/// Render one event the way the inspector prints it
///
/// With UTC timestamps enabled and a positive `when`, the RFC 3339 time is
/// appended in brackets.
pub fn render_event<S>(event: &JoystickEvent<S>, config: &InspectorConfig) -> String {
    let text = event.describe();
    if !config.utc_timestamps() {
        return text;
    }

    match timestamp_utc(event.when()) {
        Some(ts) => format!("{} [{}]", text, ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => text,
    }
}

/// Decode one raw line; invalid UTF-8 is a malformed record
fn decode_line(raw: &[u8]) -> Result<&str> {
    std::str::from_utf8(raw).map_err(|e| {
        JoystickEventError::Record(format!(
            "{}: {}",
            e,
            String::from_utf8_lossy(raw).trim_end()
        ))
    })
}

/// Parse one non-empty line into an event
pub fn build_event(line: &str, config: &InspectorConfig) -> Result<JoystickEvent<String>> {
    let mut record = EventRecord::parse_line(line)?;
    if record.source.is_none() {
        record.source = Some(config.default_source.clone());
    }
    record.into_event(config.strict_codes)
}

/// Inspect an event log
///
/// Reads `reader` to the end and writes one rendered line per accepted event
/// to `writer`.
///
/// # Errors
///
/// Returns I/O errors from either side. With `stop_on_error` the first
/// rejected line is returned as the error; otherwise rejected lines are
/// logged and counted.
///
/// # Examples
///
/// ```
/// use joystick_event::config::InspectorConfig;
/// use joystick_event::inspect::inspect;
///
/// # tokio_test::block_on(async {
/// let input: &[u8] = b"{\"id\":5,\"command\":\"fire\",\"when\":1000}\n";
/// let mut output = Vec::new();
/// let summary = inspect(input, &mut output, &InspectorConfig::default()).await?;
///
/// assert_eq!(summary.accepted, 1);
/// assert_eq!(output, b"BUTTON_ACTION,cmd=fire,when=1000,modifiers=\n");
/// # Ok::<(), joystick_event::error::JoystickEventError>(())
/// # }).unwrap();
/// ```
pub async fn inspect<R, W>(
    mut reader: R,
    writer: &mut W,
    config: &InspectorConfig,
) -> Result<InspectSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut summary = InspectSummary::default();
    let mut line_no: u64 = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        line_no += 1;

        let result = decode_line(&buf).and_then(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                Ok(None)
            } else {
                build_event(line, config).map(Some)
            }
        });

        match result {
            Ok(None) => {}
            Ok(Some(event)) => {
                debug!("Line {}: {:?}", line_no, event);
                let rendered = render_event(&event, config);
                writer.write_all(rendered.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                summary.record(event.id());
            }
            Err(e) => {
                warn!("Line {}: {}", line_no, e);
                summary.rejected += 1;
                if config.stop_on_error {
                    writer.flush().await?;
                    return Err(e);
                }
            }
        }
    }

    writer.flush().await?;
    Ok(summary)
}
