//! Codec module for decoding requests and encoding responses
//!
//! Both codecs work on whole messages: one buffer in, one [`Request`] out;
//! one [`Response`] in, one buffer out. They implement the `tokio_util`
//! [`Decoder`] and [`Encoder`] traits so a connection can be framed with
//! `FramedRead`/`FramedWrite`, and they also offer plain one-shot methods
//! that need no I/O at all.
//!
//! # Architecture
//!
//! - Request handling:
//!   - [`RequestDecoder`]: splits the buffer into header block and body
//!   - Header parsing via the `header` module
//!   - Body policy via the `body` module
//!
//! - Response handling:
//!   - [`ResponseEncoder`]: checks the content type, then writes
//!   - Status line and `Content-Type` via the `header` module
//!   - Payload serialization via the `body` module
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use http::StatusCode;
//! use serde_json::json;
//! use tokio_util::codec::{Decoder, Encoder};
//! use wisp_http::codec::{RequestDecoder, ResponseEncoder};
//! use wisp_http::protocol::Response;
//!
//! let mut request_buffer = BytesMut::from(&b"GET / HTTP/1.1\r\n\r\n"[..]);
//! let request = RequestDecoder::new().decode(&mut request_buffer).unwrap().unwrap();
//! assert_eq!(request.method(), Some("GET"));
//!
//! let mut response_buffer = BytesMut::new();
//! ResponseEncoder::new().encode(Response::json(StatusCode::OK, json!({"ok": true})), &mut response_buffer).unwrap();
//! assert!(response_buffer.starts_with(b"HTTP/1.1 200\r\n"));
//! ```
//!
//! [`Request`]: crate::protocol::Request
//! [`Response`]: crate::protocol::Response
//! [`Decoder`]: tokio_util::codec::Decoder
//! [`Encoder`]: tokio_util::codec::Encoder

mod body;
mod header;
mod request_decoder;
mod response_encoder;

pub use request_decoder::{MAX_HEADER_SIZE, RequestDecoder};
pub use response_encoder::ResponseEncoder;
