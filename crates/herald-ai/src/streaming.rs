//! Server-Sent Events (SSE) streaming parser.
//!
//! The chat completion API streams its reply as SSE. `SseParser` is the
//! line-level state machine; `sse_events` drives it lazily from a reqwest
//! response body so fragments reach the caller as they arrive.

use futures_util::{stream, Stream, StreamExt};
use tokio::io::AsyncBufReadExt;
use tokio_util::io::StreamReader;

use crate::AiError;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The event type, when the server names one.
    pub event: Option<String>,
    /// The event data (multi-line data joined with `\n`).
    pub data: String,
}

/// Incremental SSE line parser.
#[derive(Debug, Default)]
pub struct SseParser {
    current_event: Option<String>,
    current_data: String,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line (without its terminator). Returns an event when the
    /// line completes one.
    pub fn push_line(&mut self, line: &str) -> Option<SseEvent> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            // Empty line = end of event
            let event = self.take_event();
            self.current_event = None;
            return event;
        }

        if let Some(event_type) = line.strip_prefix("event:") {
            self.current_event = Some(event_type.trim_start().to_string());
        } else if let Some(data) = line.strip_prefix("data:") {
            let data = data.strip_prefix(' ').unwrap_or(data);
            if !self.current_data.is_empty() {
                self.current_data.push('\n');
            }
            self.current_data.push_str(data);
        }
        // Ignore other fields (id:, retry:, comments)
        None
    }

    /// Flush an event left open when the body ended without a blank line.
    pub fn finish(&mut self) -> Option<SseEvent> {
        self.take_event()
    }

    fn take_event(&mut self) -> Option<SseEvent> {
        if self.current_data.is_empty() {
            return None;
        }
        Some(SseEvent {
            event: self.current_event.take(),
            data: std::mem::take(&mut self.current_data),
        })
    }
}

/// Turn a streaming reqwest response into a lazy stream of SSE events.
///
/// The stream ends after the body ends, or after the first read error
/// (yielded as `Err`).
pub fn sse_events(
    response: reqwest::Response,
) -> impl Stream<Item = Result<SseEvent, AiError>> + Send {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(std::io::Error::other));
    let lines = tokio::io::BufReader::new(StreamReader::new(byte_stream)).lines();

    stream::unfold(Some((lines, SseParser::new())), |state| async move {
        let (mut lines, mut parser) = state?;
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if let Some(event) = parser.push_line(&line) {
                        return Some((Ok(event), Some((lines, parser))));
                    }
                }
                Ok(None) => return parser.finish().map(|event| (Ok(event), None)),
                Err(e) => return Some((Err(AiError::NetworkError(e.to_string())), None)),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(parser: &mut SseParser, text: &str) -> Vec<SseEvent> {
        text.lines().filter_map(|line| parser.push_line(line)).collect()
    }

    #[test]
    fn blank_line_terminates_event() {
        let mut parser = SseParser::new();
        let events = feed(&mut parser, "data: {\"a\":1}\n\ndata: {\"b\":2}\n\n");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].data, "{\"a\":1}");
        assert_eq!(events[1].data, "{\"b\":2}");
        assert!(events[0].event.is_none());
    }

    #[test]
    fn named_event_and_multiline_data() {
        let mut parser = SseParser::new();
        let events = feed(&mut parser, "event: delta\ndata: one\ndata: two\n\n");
        assert_eq!(
            events,
            vec![SseEvent {
                event: Some("delta".into()),
                data: "one\ntwo".into(),
            }]
        );
    }

    #[test]
    fn data_without_space_and_crlf() {
        let mut parser = SseParser::new();
        assert!(parser.push_line("data:[DONE]\r").is_none());
        let event = parser.push_line("\r").unwrap();
        assert_eq!(event.data, "[DONE]");
    }

    #[test]
    fn comments_and_ids_are_ignored() {
        let mut parser = SseParser::new();
        let events = feed(&mut parser, ": keep-alive\nid: 7\nretry: 100\n\n");
        assert!(events.is_empty());
    }

    #[test]
    fn finish_flushes_unterminated_event() {
        let mut parser = SseParser::new();
        assert!(parser.push_line("data: tail").is_none());
        assert_eq!(parser.finish().unwrap().data, "tail");
        assert!(parser.finish().is_none());
    }

    #[test]
    fn event_name_does_not_leak_into_next_event() {
        let mut parser = SseParser::new();
        let events = feed(&mut parser, "event: first\ndata: a\n\ndata: b\n\n");
        assert_eq!(events[0].event.as_deref(), Some("first"));
        assert_eq!(events[1].event, None);
    }
}
