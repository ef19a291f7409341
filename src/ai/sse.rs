//! Decoding of the `text/event-stream` body returned by streaming
//! chat completions.

use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use std::collections::VecDeque;
use std::pin::Pin;

pub const DATA_PREFIX: &str = "data: ";
pub const DONE_SENTINEL: &str = "[DONE]";

#[derive(Debug, Clone, PartialEq)]
pub enum SseEvent {
    Fragment(String),
    Done,
}

#[derive(Deserialize)]
struct ChunkDelta {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChunkChoice {
    delta: Option<ChunkDelta>,
}

#[derive(Deserialize)]
struct CompletionChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

/// Interpret one complete line of the event stream.
///
/// Returns `None` for lines without the data marker, payloads that are not
/// valid JSON, and chunks that carry no content.
pub fn parse_sse_line(line: &str) -> Option<SseEvent> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let data = line.strip_prefix(DATA_PREFIX)?;
    if data == DONE_SENTINEL {
        return Some(SseEvent::Done);
    }

    match serde_json::from_str::<CompletionChunk>(data) {
        Ok(chunk) => chunk
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta)
            .and_then(|delta| delta.content)
            .filter(|piece| !piece.is_empty())
            .map(SseEvent::Fragment),
        Err(err) => {
            tracing::debug!("skipping malformed stream event: {err}");
            None
        }
    }
}

/// Holds the unterminated tail of the byte stream between chunks.
#[derive(Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    /// Feed one chunk and return every line it completed.
    ///
    /// Splitting happens on raw bytes, so a multi-byte character cut in half
    /// by the transport is decoded once both halves have arrived.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(offset) = self.pending[start..].iter().position(|b| *b == b'\n') {
            let end = start + offset;
            lines.push(String::from_utf8_lossy(&self.pending[start..end]).into_owned());
            start = end + 1;
        }
        self.pending.drain(..start);
        lines
    }

    pub fn pending(&self) -> &[u8] {
        &self.pending
    }
}

struct DecodeState<S> {
    inner: Pin<Box<S>>,
    lines: LineBuffer,
    ready: VecDeque<String>,
    finished: bool,
}

/// Turn a byte stream into the sequence of content fragments it carries.
///
/// The sequence ends at the sentinel (without reading further), when the
/// transport closes, or right after the first transport error.
pub fn fragments<S, B, E>(inner: S) -> impl Stream<Item = Result<String, E>>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
{
    let state = DecodeState {
        inner: Box::pin(inner),
        lines: LineBuffer::default(),
        ready: VecDeque::new(),
        finished: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(piece) = state.ready.pop_front() {
                return Some((Ok(piece), state));
            }
            if state.finished {
                return None;
            }

            match state.inner.next().await {
                Some(Ok(chunk)) => {
                    for line in state.lines.push(chunk.as_ref()) {
                        match parse_sse_line(&line) {
                            Some(SseEvent::Fragment(piece)) => state.ready.push_back(piece),
                            Some(SseEvent::Done) => {
                                state.finished = true;
                                break;
                            }
                            None => {}
                        }
                    }
                }
                Some(Err(err)) => {
                    state.finished = true;
                    return Some((Err(err), state));
                }
                None => {
                    if !state.lines.pending().is_empty() {
                        tracing::debug!(
                            "discarding {} bytes of unterminated stream data",
                            state.lines.pending().len()
                        );
                    }
                    state.finished = true;
                }
            }
        }
    })
}
