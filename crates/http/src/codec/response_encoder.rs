//! HTTP response encoder module
//!
//! Writes `HTTP/1.1 <code>\r\nContent-Type: <type>\r\n\r\n` followed by the
//! serialized body, if any. An empty text body counts as no body. A body is
//! only written for content types the [`ContentKind`] classification
//! supports; any other content type with a body fails with [`SendError::UnsupportedContentType`] before a single byte
//! is written.
//!
//! # Example
//!
//! ```
//! use http::StatusCode;
//! use serde_json::json;
//! use wisp_http::codec::ResponseEncoder;
//! use wisp_http::protocol::ResponseBody;
//!
//! let bytes = ResponseEncoder::new()
//!     .encode_response(StatusCode::OK, "application/json", Some(&ResponseBody::Json(json!({"hello": "world"}))))
//!     .unwrap();
//! assert_eq!(&bytes[..], &b"HTTP/1.1 200\r\nContent-Type: application/json\r\n\r\n{\"hello\":\"world\"}"[..]);
//! ```

use bytes::BytesMut;
use http::StatusCode;
use tokio_util::codec::Encoder;
use tracing::error;

use crate::codec::body::PayloadEncoder;
use crate::codec::header::HeaderEncoder;
use crate::ensure;
use crate::protocol::{ContentKind, Response, ResponseBody, SendError};

#[derive(Debug, Default)]
pub struct ResponseEncoder {
    header_encoder: HeaderEncoder,
    payload_encoder: PayloadEncoder,
}

impl ResponseEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes a status, content type and optional body into a fresh buffer.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::UnsupportedContentType`] when `body` is present
    /// and `content_type` is neither JSON nor HTML/plain text.
    pub fn encode_response(&mut self, status: StatusCode, content_type: &str, body: Option<&ResponseBody>) -> Result<BytesMut, SendError> {
        let mut dst = BytesMut::new();
        self.encode_parts(status, content_type, body, &mut dst)?;
        Ok(dst)
    }

    fn encode_parts(&mut self, status: StatusCode, content_type: &str, body: Option<&ResponseBody>, dst: &mut BytesMut) -> Result<(), SendError> {
        let body = body.filter(|body| !body.is_empty());
        let kind = ContentKind::classify(content_type);
        ensure!(body.is_none() || kind.is_some(), {
            error!(content_type, "can't encode body for unsupported content type");
            SendError::unsupported_content_type(content_type)
        });

        let start = dst.len();
        let result = self.write_message(status, content_type, kind.zip(body), dst);

        // leave nothing half written behind
        if result.is_err() {
            dst.truncate(start);
        }
        result
    }

    fn write_message(
        &mut self,
        status: StatusCode,
        content_type: &str,
        payload: Option<(ContentKind, &ResponseBody)>,
        dst: &mut BytesMut,
    ) -> Result<(), SendError> {
        self.header_encoder.encode((status, content_type), dst)?;
        if let Some(payload) = payload {
            self.payload_encoder.encode(payload, dst)?;
        }
        Ok(())
    }
}

impl Encoder<Response> for ResponseEncoder {
    type Error = SendError;

    fn encode(&mut self, item: Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.encode_parts(item.status(), item.content_type(), item.body(), dst)
    }
}
