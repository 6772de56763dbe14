//! Response header block encoder.
//!
//! The header block is always exactly two lines: a status line carrying only
//! the numeric code (no reason phrase) and a `Content-Type` line, followed by
//! the blank line that ends the block. No `Content-Length` is written; closing
//! the connection marks the end of the message.

use std::io::Write;

use bytes::{BufMut, BytesMut};
use http::StatusCode;
use tokio_util::codec::Encoder;

use crate::protocol::{CONTENT_TYPE, SendError};
use crate::utils::FastWrite;

/// Initial buffer size reserved for a response
const INIT_HEADER_SIZE: usize = 256;

/// Encoder for the status line and the `Content-Type` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderEncoder;

impl Encoder<(StatusCode, &str)> for HeaderEncoder {
    type Error = SendError;

    fn encode(&mut self, item: (StatusCode, &str), dst: &mut BytesMut) -> Result<(), Self::Error> {
        let (status, content_type) = item;

        dst.reserve(INIT_HEADER_SIZE);
        write!(FastWrite(dst), "HTTP/1.1 {}\r\n", status.as_str())?;

        dst.put_slice(CONTENT_TYPE.as_bytes());
        dst.put_slice(b": ");
        dst.put_slice(content_type.as_bytes());
        dst.put_slice(b"\r\n\r\n");
        Ok(())
    }
}
