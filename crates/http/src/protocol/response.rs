//! Response representation.
//!
//! A [`Response`] is a status code, a declared content type and an optional
//! payload. Which payloads can actually be written is decided by the
//! [`ResponseEncoder`](crate::codec::ResponseEncoder): only the content types
//! listed in [`ContentKind`] are supported.

use http::StatusCode;
use mime::Mime;
use serde_json::Value;

/// A response produced by dispatch, never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: StatusCode,
    content_type: String,
    body: Option<ResponseBody>,
}

/// Payload of a [`Response`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl Response {
    pub fn new(status: StatusCode, content_type: impl Into<String>, body: Option<ResponseBody>) -> Self {
        Self { status, content_type: content_type.into(), body }
    }

    /// An `application/json` response.
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self::new(status, mime::APPLICATION_JSON.as_ref(), Some(ResponseBody::Json(body)))
    }

    /// A `text/html` response.
    pub fn html(status: StatusCode, body: impl Into<String>) -> Self {
        Self::new(status, mime::TEXT_HTML.as_ref(), Some(ResponseBody::Text(body.into())))
    }

    /// A `text/plain` response.
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self::new(status, mime::TEXT_PLAIN.as_ref(), Some(ResponseBody::Text(body.into())))
    }

    /// A `text/html` response with nothing after the header block.
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, mime::TEXT_HTML.as_ref(), None)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn body(&self) -> Option<&ResponseBody> {
        self.body.as_ref()
    }

    pub fn into_parts(self) -> (StatusCode, String, Option<ResponseBody>) {
        (self.status, self.content_type, self.body)
    }
}

impl ResponseBody {
    /// An empty text body, which is written like no body at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, ResponseBody::Text(text) if text.is_empty())
    }
}

impl From<Value> for ResponseBody {
    fn from(value: Value) -> Self {
        ResponseBody::Json(value)
    }
}

impl From<String> for ResponseBody {
    fn from(value: String) -> Self {
        ResponseBody::Text(value)
    }
}

impl From<&str> for ResponseBody {
    fn from(value: &str) -> Self {
        ResponseBody::Text(value.to_owned())
    }
}

/// The content types a response body can be serialized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// `application/json`: the body is serialized as JSON text.
    Json,
    /// `text/html` or `text/plain`: the body is written verbatim.
    Text,
}

impl ContentKind {
    /// Classifies a declared content type, ignoring parameters such as `charset`.
    ///
    /// Returns `None` for anything outside the supported set, including
    /// values that are not valid media types.
    pub fn classify(content_type: &str) -> Option<Self> {
        let mime: Mime = content_type.trim().parse().ok()?;
        let (type_, subtype) = (mime.type_(), mime.subtype());
        if type_ == mime::APPLICATION && subtype == mime::JSON {
            Some(ContentKind::Json)
        } else if type_ == mime::TEXT && (subtype == mime::HTML || subtype == mime::PLAIN) {
            Some(ContentKind::Text)
        } else {
            None
        }
    }
}
