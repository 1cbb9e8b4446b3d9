//! Streaming response sink writing to any `io::Write`.
//!
//! Headers go out lazily, on the first body write or on `finish`, so the
//! status can still change until then. Once they are out the status is
//! fixed and `set_status` fails.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use tracing::trace;

use lumenite_core::{
    application::{ApplicationError, ports::ResponseSink},
    error::LumeniteResult,
};

use super::ResponseStyle;

pub const CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Response written straight to a byte stream (stdout for CGI).
#[derive(Debug)]
pub struct StreamResponse<W: Write + Send> {
    state: Mutex<StreamState<W>>,
    style: ResponseStyle,
}

#[derive(Debug)]
struct StreamState<W> {
    writer: W,
    status: (u16, String),
    headers_sent: bool,
    finished: bool,
}

impl<W: Write + Send> StreamResponse<W> {
    /// Status defaults to `200 OK`.
    pub fn new(writer: W, style: ResponseStyle) -> Self {
        Self {
            state: Mutex::new(StreamState {
                writer,
                status: (200, "OK".into()),
                headers_sent: false,
                finished: false,
            }),
            style,
        }
    }

    pub fn style(&self) -> ResponseStyle {
        self.style
    }

    /// Recover the writer.
    pub fn into_inner(self) -> LumeniteResult<W> {
        self.state
            .into_inner()
            .map(|state| state.writer)
            .map_err(|_| ApplicationError::ResponseLock.into())
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&mut StreamState<W>) -> LumeniteResult<T>,
    ) -> LumeniteResult<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ApplicationError::ResponseLock)?;
        f(&mut state)
    }

    fn send_headers(&self, state: &mut StreamState<W>) -> io::Result<()> {
        if state.headers_sent {
            return Ok(());
        }
        let (code, reason) = &state.status;
        match self.style {
            ResponseStyle::Http => write!(state.writer, "HTTP/1.1 {code} {reason}\r\n")?,
            ResponseStyle::Cgi => write!(state.writer, "Status: {code} {reason}\r\n")?,
        }
        write!(state.writer, "Content-Type: {CONTENT_TYPE}\r\n\r\n")?;
        state.headers_sent = true;
        trace!(code, style = %self.style, "response headers sent");
        Ok(())
    }
}

fn write_failed(e: io::Error) -> ApplicationError {
    ApplicationError::ResponseWrite {
        reason: e.to_string(),
    }
}

fn ensure_open<W>(state: &StreamState<W>) -> Result<(), ApplicationError> {
    if state.finished {
        return Err(ApplicationError::ResponseWrite {
            reason: "response already finished".into(),
        });
    }
    Ok(())
}

impl<W: Write + Send> ResponseSink for StreamResponse<W> {
    fn set_status(&self, code: u16, reason: &str) -> LumeniteResult<()> {
        self.with_state(|state| {
            ensure_open(state)?;
            if state.headers_sent {
                return Err(ApplicationError::ResponseWrite {
                    reason: "headers already sent".into(),
                }
                .into());
            }
            state.status = (code, reason.to_string());
            Ok(())
        })
    }

    fn write_body(&self, body: &[u8]) -> LumeniteResult<()> {
        self.with_state(|state| {
            ensure_open(state)?;
            self.send_headers(state).map_err(write_failed)?;
            state.writer.write_all(body).map_err(write_failed)?;
            Ok(())
        })
    }

    fn finish(&self) -> LumeniteResult<()> {
        self.with_state(|state| {
            if state.finished {
                return Ok(());
            }
            self.send_headers(state).map_err(write_failed)?;
            state.writer.flush().map_err(write_failed)?;
            state.finished = true;
            Ok(())
        })
    }
}
