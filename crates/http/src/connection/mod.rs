//! Connection handling module
//!
//! - [`HttpConnection`]: runs the decode, handle, encode cycle for one
//!   connection, then closes it. There is no keep-alive: every connection
//!   carries exactly one request.

mod http_connection;

pub use http_connection::HttpConnection;
