//! In-memory transport for client tests.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::TransportError;
use crate::transport::{BoxFuture, Transport};

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Timeout,
}

/// A request seen by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub url: String,
    pub body: Value,
}

/// Records every request and answers each one with the same reply.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    reply: Reply,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingTransport {
    pub fn replying(body: &str) -> Self {
        Self {
            reply: Reply::Body(body.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn timing_out() -> Self {
        Self {
            reply: Reply::Timeout,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Body of the only recorded call.
    pub fn single_body(&self) -> Value {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one request");
        calls[0].body.clone()
    }
}

impl Transport for RecordingTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<String, TransportError>> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            body: body.clone(),
        });

        let reply = self.reply.clone();
        Box::pin(async move {
            match reply {
                Reply::Body(body) => Ok(body),
                Reply::Timeout => Err(TransportError::Timeout),
            }
        })
    }
}
