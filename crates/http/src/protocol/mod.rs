//! Core protocol types.
//!
//! This module holds the values that flow through one connection:
//!
//! - **Request** ([`request`]): what the decoder produces
//!   - [`RequestHeader`]: request line, header fields and query
//!   - [`RequestBody`]: absent, raw text or a structured JSON value
//!   - [`Request`]: header and body together
//!
//! - **Query** ([`query`]): the `?`-delimited part of the path
//!   - [`Query`]: raw key/value pairs, last duplicate wins
//!
//! - **Response** ([`response`]): what dispatch produces and the encoder consumes
//!   - [`Response`]: status, declared content type, optional payload
//!   - [`ContentKind`]: the supported content types
//!
//! - **Error Handling** ([`error`]):
//!   - [`HttpError`]: top-level error of a connection
//!   - [`ParseError`]: request decoding errors
//!   - [`SendError`]: response encoding errors

mod request;
pub use request::CONTENT_TYPE;
pub use request::Request;
pub use request::RequestBody;
pub use request::RequestHeader;

mod query;
pub use query::Query;

mod response;
pub use response::ContentKind;
pub use response::Response;
pub use response::ResponseBody;

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;
