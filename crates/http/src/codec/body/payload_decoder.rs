//! Request body decoding policy.
//!
//! Which shape the body takes depends on the method and the declared
//! content type:
//!
//! | method        | `Content-Type`               | body                         |
//! |---------------|------------------------------|------------------------------|
//! | `POST`, `PUT` | exactly `application/json`   | parsed JSON, or an error     |
//! | `POST`, `PUT` | anything else                | empty JSON object            |
//! | other         | ignored                      | raw text, or absent          |

use serde_json::Value;
use tracing::{trace, warn};

use crate::protocol::{ParseError, RequestBody, RequestHeader};

/// Decoder for the text after the header block.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadDecoder;

impl PayloadDecoder {
    /// Decodes `payload`, which is `None` when the request had no blank line.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::BodyDecode`] when the body is declared as JSON
    /// but is not valid JSON. An absent or empty body is not valid JSON.
    pub fn decode(&self, header: &RequestHeader, payload: Option<&str>) -> Result<RequestBody, ParseError> {
        if !header.need_body() {
            return Ok(payload.map_or(RequestBody::Absent, |text| RequestBody::Text(text.to_owned())));
        }

        if !header.is_json() {
            return Ok(RequestBody::empty_object());
        }

        let value: Value = serde_json::from_str(payload.unwrap_or_default()).inspect_err(|e| {
            warn!(cause = %e, "request body is not valid json");
        })?;
        trace!("decoded json body");
        Ok(RequestBody::Json(value))
    }
}
