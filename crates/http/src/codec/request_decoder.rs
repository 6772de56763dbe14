//! HTTP request decoder module
//!
//! A request arrives as one contiguous buffer. The decoder converts it to
//! text, splits it on the first blank line into a header block and a body,
//! and hands each part to its own decoder:
//!
//! - Header parsing: [`HeaderDecoder`] for the request line and header fields
//! - Payload handling: [`PayloadDecoder`] for the method/content-type body policy
//!
//! The framed [`Decoder`] keeps buffering until the header block is complete
//! (or grows past [`MAX_HEADER_SIZE`], or the peer closes), then takes
//! everything buffered as the request. A body is not awaited: bytes arriving
//! after that point are not part of the request.
//!
//! # Example
//!
//! ```
//! use wisp_http::codec::RequestDecoder;
//!
//! let request = RequestDecoder::new().decode_request(b"GET /?a=1 HTTP/1.1\r\nHost: localhost\r\n\r\n").unwrap();
//! assert_eq!(request.method(), Some("GET"));
//! assert_eq!(request.route_path(), Some("/"));
//! assert_eq!(request.query().value("a"), Some("1"));
//! ```

use std::time::Instant;

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::body::PayloadDecoder;
use crate::codec::header::HeaderDecoder;
use crate::protocol::{ParseError, Request};

/// Separator between the header block and the body
const HEADER_END: &str = "\r\n\r\n";

/// Bytes buffered without a blank line before the buffer is decoded as is
pub const MAX_HEADER_SIZE: usize = 64 * 1024;

/// A decoder turning one raw buffer into one [`Request`].
///
/// The decoder is stateless between requests; one instance can decode any
/// number of independent buffers.
#[derive(Debug, Default)]
pub struct RequestDecoder {
    header_decoder: HeaderDecoder,
    payload_decoder: PayloadDecoder,
}

impl RequestDecoder {
    /// Creates a new `RequestDecoder` instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a complete request buffer.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD. A buffer
    /// without a blank line is treated as a header block with no body.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::BodyDecode`] when a `POST` or `PUT` declares an
    /// `application/json` body that does not parse.
    pub fn decode_request(&self, src: &[u8]) -> Result<Request, ParseError> {
        let start = Instant::now();

        let text = String::from_utf8_lossy(src);
        let (header_block, payload) = match text.split_once(HEADER_END) {
            Some((header_block, payload)) => (header_block, Some(payload)),
            None => (&*text, None),
        };

        let header = self.header_decoder.decode(header_block);
        let body = self.payload_decoder.decode(&header, payload)?;

        trace!(elapsed = ?start.elapsed(), size = src.len(), "decoded request");
        Ok(header.body(body))
    }
}

impl Decoder for RequestDecoder {
    type Item = Request;
    type Error = ParseError;

    /// Decodes everything currently buffered as one request once the header block is complete.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(request))`: the buffer held a request and has been drained
    /// - `Ok(None)`: no blank line yet, need more data
    /// - `Err(_)`: the declared JSON body failed to parse
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let header_complete = src.windows(HEADER_END.len()).any(|window| window == HEADER_END.as_bytes());
        if !header_complete && src.len() < MAX_HEADER_SIZE {
            trace!(size = src.len(), "header block incomplete, need more data");
            return Ok(None);
        }

        let frame = src.split();
        self.decode_request(&frame).map(Some)
    }

    /// The peer closed its side: whatever was buffered is the request.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        let frame = src.split();
        self.decode_request(&frame).map(Some)
    }
}
