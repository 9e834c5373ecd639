use may_minihttp::Response;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// Transport-neutral reply produced by [`DocEndpoints`](super::DocEndpoints).
///
/// Every documentation reply is JSON, or empty when documentation is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl DocReply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn empty() -> Self {
        Self::ok(Vec::new())
    }

    /// Serialize `value` as the 200 body; a serialization failure becomes a 500.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::ok(body),
            Err(e) => {
                error!(error = %e, "Failed to serialize documentation reply");
                Self::error(500, json!({ "error": "Internal Server Error" }))
            }
        }
    }

    pub fn error(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string().into_bytes(),
        }
    }

    #[must_use]
    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or_default()
    }
}

pub fn write_reply(res: &mut Response, reply: DocReply) {
    let reason = status_reason(reply.status);
    res.status_code(reply.status as usize, reason);
    res.header("Content-Type: application/json");
    if reply.status == 405 {
        res.header("Allow: GET");
    }
    res.body_vec(reply.body);
}
