//! A one-shot request/response protocol over a byte stream
//!
//! Each connection carries exactly one textual request. The request is
//! decoded into a structured [`protocol::Request`], handed to a
//! [`handler::Handler`], and the resulting [`protocol::Response`] is encoded
//! back onto the stream before the connection is closed.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use http::StatusCode;
//! use serde_json::json;
//! use tokio::net::TcpListener;
//! use tracing::{error, info, warn};
//! use wisp_http::connection::HttpConnection;
//! use wisp_http::handler::make_handler;
//! use wisp_http::protocol::{Request, Response};
//!
//! fn hello(_request: &Request) -> Response {
//!     Response::json(StatusCode::OK, json!({"hello": "world"}))
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let tcp_listener = match TcpListener::bind("127.0.0.1:3000").await {
//!         Ok(tcp_listener) => tcp_listener,
//!         Err(e) => {
//!             error!(cause = %e, "bind server error");
//!             return;
//!         }
//!     };
//!
//!     let handler = Arc::new(make_handler(hello));
//!
//!     loop {
//!         let (tcp_stream, _remote_addr) = match tcp_listener.accept().await {
//!             Ok(stream_and_addr) => stream_and_addr,
//!             Err(e) => {
//!                 warn!(cause = %e, "failed to accept");
//!                 continue;
//!             }
//!         };
//!
//!         let handler = handler.clone();
//!
//!         tokio::spawn(async move {
//!             let (reader, writer) = tcp_stream.into_split();
//!             let connection = HttpConnection::new(reader, writer);
//!             match connection.process(handler).await {
//!                 Ok(()) => info!("finished process, connection shutdown"),
//!                 Err(e) => error!("service has error, cause {}, connection shutdown", e),
//!             }
//!         });
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: request, query and response types plus errors
//! - [`codec`]: the request decoder and response encoder
//! - [`handler`]: the trait that turns a request into a response
//! - [`connection`]: one request/response cycle over an async stream
//!
//! # Wire format
//!
//! Request: `METHOD SP PATH SP VERSION CRLF (Name: Value CRLF)* CRLF body`.
//!
//! Response: `HTTP/1.1 <code> CRLF Content-Type: <type> CRLF CRLF body`, with
//! no reason phrase and no `Content-Length`; the close marks the end.
//!
//! # Limitations
//!
//! - One request per connection, no keep-alive or pipelining
//! - No body framing: the request ends with the read that completes the
//!   header block (up to 64 KiB), or when the peer closes
//! - No chunked transfer encoding, no TLS
//! - Response bodies only for JSON and HTML/plain text

pub mod codec;
pub mod connection;
pub mod handler;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
