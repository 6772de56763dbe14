//! Request and response body handling.
//!
//! - [`PayloadDecoder`]: applies the method and content-type policy to the
//!   text after the request header block
//! - [`PayloadEncoder`]: serializes a response body for a supported content type

mod payload_decoder;
mod payload_encoder;

pub use payload_decoder::PayloadDecoder;
pub use payload_encoder::PayloadEncoder;
