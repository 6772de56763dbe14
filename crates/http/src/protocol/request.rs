//! Decoded request representation.
//!
//! A [`Request`] is built once per connection by the
//! [`RequestDecoder`](crate::codec::RequestDecoder) and never mutated
//! afterwards. Decoding is permissive: request-line tokens that are missing
//! from the input are `None` rather than an error.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::protocol::Query;

/// The `Content-Type` header name, matched with exact case.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Request line, header fields and query of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeader {
    method: Option<String>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    query: Query,
}

impl RequestHeader {
    /// Creates a header from its parts, deriving the query from `path`.
    pub fn new(method: Option<String>, path: Option<String>, version: Option<String>, headers: HashMap<String, String>) -> Self {
        let query = path.as_deref().map(Query::from_path).unwrap_or_default();
        Self { method, path, version, headers, query }
    }

    /// Attaches a body to this header, converting it into a full [`Request`].
    pub fn body(self, body: RequestBody) -> Request {
        Request { header: self, body }
    }

    /// The method token as received, e.g. `GET`.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// The raw path token, including any `?query` component.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The path with the query component stripped; this is what routes match on.
    pub fn route_path(&self) -> Option<&str> {
        self.path().map(|path| path.split_once('?').map_or(path, |(path, _)| path))
    }

    /// The raw text after the first `?` of the path.
    pub fn query_string(&self) -> Option<&str> {
        self.path().and_then(|path| path.split_once('?')).map(|(_, query)| query)
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Looks up a header by its exact name; names are not case-normalized.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Whether the method carries a structured body: `POST` and `PUT`.
    pub fn need_body(&self) -> bool {
        matches!(self.method(), Some("POST" | "PUT"))
    }

    /// Whether the body is declared as JSON, compared exactly against `application/json`.
    pub fn is_json(&self) -> bool {
        self.content_type() == Some(mime::APPLICATION_JSON.as_ref())
    }
}

/// Body of a decoded request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No blank line separated the header block from a body.
    Absent,
    /// Raw body text, kept for methods other than `POST` and `PUT`.
    Text(String),
    /// Structured body of a `POST` or `PUT`.
    Json(Value),
}

impl RequestBody {
    /// The structured value used for `POST`/`PUT` bodies that are not declared as JSON.
    pub fn empty_object() -> Self {
        RequestBody::Json(Value::Object(serde_json::Map::new()))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RequestBody::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, RequestBody::Absent)
    }
}

/// A fully decoded request: header plus body.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    header: RequestHeader,
    body: RequestBody,
}

impl Request {
    pub fn header(&self) -> &RequestHeader {
        &self.header
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    pub fn method(&self) -> Option<&str> {
        self.header.method()
    }

    pub fn path(&self) -> Option<&str> {
        self.header.path()
    }

    pub fn route_path(&self) -> Option<&str> {
        self.header.route_path()
    }

    pub fn version(&self) -> Option<&str> {
        self.header.version()
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        self.header.headers()
    }

    pub fn query(&self) -> &Query {
        self.header.query()
    }

    /// Deserializes the raw query string into `T`, percent-decoding values.
    ///
    /// A request without a query component deserializes from the empty string.
    pub fn query_as<T: DeserializeOwned>(&self) -> Result<T, serde_urlencoded::de::Error> {
        serde_urlencoded::from_str(self.header.query_string().unwrap_or_default())
    }
}
