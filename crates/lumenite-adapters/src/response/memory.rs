//! In-memory response sink for testing.

use std::sync::{Arc, RwLock};

use lumenite_core::{
    application::{ApplicationError, ports::ResponseSink},
    error::LumeniteResult,
};

/// In-memory response.
///
/// Clones share state, so a test can keep one handle and give the other to
/// the router.
#[derive(Debug, Clone, Default)]
pub struct MemoryResponse {
    inner: Arc<RwLock<MemoryResponseInner>>,
}

#[derive(Debug, Default)]
struct MemoryResponseInner {
    status: Option<(u16, String)>,
    body: Vec<u8>,
    finished: bool,
}

impl MemoryResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status code set by the router, if any.
    pub fn status(&self) -> Option<u16> {
        let inner = self.inner.read().ok()?;
        inner.status.as_ref().map(|(code, _)| *code)
    }

    pub fn reason(&self) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.status.as_ref().map(|(_, reason)| reason.clone())
    }

    pub fn body(&self) -> Vec<u8> {
        self.inner
            .read()
            .map(|inner| inner.body.clone())
            .unwrap_or_default()
    }

    /// Body decoded as UTF-8, lossily.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body()).into_owned()
    }

    pub fn is_finished(&self) -> bool {
        self.inner.read().map(|inner| inner.finished).unwrap_or(false)
    }
}

fn rejected() -> ApplicationError {
    ApplicationError::ResponseWrite {
        reason: "response already finished".into(),
    }
}

impl ResponseSink for MemoryResponse {
    fn set_status(&self, code: u16, reason: &str) -> LumeniteResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ResponseLock)?;
        if inner.finished {
            return Err(rejected().into());
        }
        inner.status = Some((code, reason.to_string()));
        Ok(())
    }

    fn write_body(&self, body: &[u8]) -> LumeniteResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ResponseLock)?;
        if inner.finished {
            return Err(rejected().into());
        }
        inner.body.extend_from_slice(body);
        Ok(())
    }

    fn finish(&self) -> LumeniteResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ResponseLock)?;
        inner.finished = true;
        Ok(())
    }
}
