//! Header processing for both directions.
//!
//! - [`HeaderDecoder`]: request line and header fields into a
//!   [`RequestHeader`](crate::protocol::RequestHeader)
//! - [`HeaderEncoder`]: status line and `Content-Type` of a response

mod header_decoder;
mod header_encoder;

pub use header_decoder::HeaderDecoder;
pub use header_encoder::HeaderEncoder;
