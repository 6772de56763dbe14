use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use http::StatusCode;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{error, info, warn};

use crate::codec::{RequestDecoder, ResponseEncoder};
use crate::handler::Handler;
use crate::protocol::{HttpError, ParseError, Request, Response, SendError};

/// Read buffer capacity, also the most a single read can deliver
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// A connection that answers exactly one request and then closes
///
/// `HttpConnection` drives a single request/response cycle:
/// - Reading one buffer and decoding it into a [`Request`]
/// - Handing the request to a [`Handler`]
/// - Encoding the [`Response`] and writing it back
/// - Shutting down the write side, which marks the end of the response
///
/// # Type Parameters
///
/// * `R`: The async readable stream type
/// * `W`: The async writable stream type
#[derive(Debug)]
pub struct HttpConnection<R, W> {
    framed_read: FramedRead<R, RequestDecoder>,
    framed_write: FramedWrite<W, ResponseEncoder>,
}

impl<R, W> HttpConnection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            framed_read: FramedRead::with_capacity(reader, RequestDecoder::new(), READ_BUFFER_SIZE),
            framed_write: FramedWrite::new(writer, ResponseEncoder::new()),
        }
    }

    /// Processes the single request of this connection.
    ///
    /// A request whose body fails to decode is answered with `400` and no body.
    /// A response that fails to encode is replaced with `500` and no body.
    /// In both cases the original error is returned once the connection is closed.
    pub async fn process<H: Handler>(mut self, handler: Arc<H>) -> Result<(), HttpError> {
        let result = match self.framed_read.next().await {
            Some(Ok(request)) => self.do_process(&request, handler.as_ref()).await,

            Some(Err(e @ ParseError::Io { .. })) => {
                error!(cause = %e, "can't read request");
                Err(e.into())
            }

            Some(Err(e)) => {
                error!(cause = %e, "can't decode request");
                self.send_error_response(StatusCode::BAD_REQUEST).await;
                Err(e.into())
            }

            None => {
                info!("connection closed before a request arrived");
                Ok(())
            }
        };

        // closing the write side ends the response
        if let Err(e) = SinkExt::<Response>::close(&mut self.framed_write).await {
            warn!(cause = %e, "failed to shutdown connection");
        }

        result
    }

    async fn do_process<H: Handler>(&mut self, request: &Request, handler: &H) -> Result<(), HttpError> {
        info!(method = request.method(), path = request.path(), "receive request");

        let response = handler.call(request);
        let status = response.status();

        match self.framed_write.send(response).await {
            Ok(()) => {
                info!(status = status.as_u16(), "sent response");
                Ok(())
            }
            Err(e @ SendError::Io { .. }) => Err(e.into()),
            Err(e) => {
                error!(cause = %e, "can't encode response");
                self.send_error_response(StatusCode::INTERNAL_SERVER_ERROR).await;
                Err(e.into())
            }
        }
    }

    async fn send_error_response(&mut self, status: StatusCode) {
        if let Err(e) = self.framed_write.send(Response::empty(status)).await {
            warn!(cause = %e, status = status.as_u16(), "can't send error response");
        }
    }
}
