//! Response payload encoder.
//!
//! JSON content is serialized compactly. Text content is written verbatim;
//! a JSON string value sent as text loses its quotes, any other JSON value
//! sent as text is written in its compact JSON form.

use bytes::{BufMut, BytesMut};
use serde_json::Value;
use tokio_util::codec::Encoder;

use crate::protocol::{ContentKind, ResponseBody, SendError};
use crate::utils::FastWrite;

/// Encoder for the bytes after the response header block.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadEncoder;

impl Encoder<(ContentKind, &ResponseBody)> for PayloadEncoder {
    type Error = SendError;

    fn encode(&mut self, item: (ContentKind, &ResponseBody), dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            (ContentKind::Json, ResponseBody::Json(value)) => write_json(value, dst),
            (ContentKind::Json, ResponseBody::Text(text)) => write_json(text, dst),
            (ContentKind::Text, ResponseBody::Text(text) | ResponseBody::Json(Value::String(text))) => {
                dst.put_slice(text.as_bytes());
                Ok(())
            }
            (ContentKind::Text, ResponseBody::Json(value)) => write_json(value, dst),
        }
    }
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T, dst: &mut BytesMut) -> Result<(), SendError> {
    serde_json::to_writer(FastWrite(dst), value).map_err(|e| SendError::invalid_body(format!("can't serialize json body: {e}")))
}
