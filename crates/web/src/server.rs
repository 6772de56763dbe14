use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn};
use wisp_http::connection::HttpConnection;

use crate::config::{ConfigError, ServerConfig};
use crate::router::Router;

pub struct ServerBuilder {
    router: Option<Router>,
    address: Option<SocketAddr>,
}

impl ServerBuilder {
    fn new() -> Self {
        Self { router: None, address: None }
    }

    pub fn address(mut self, address: SocketAddr) -> Self {
        self.address = Some(address);
        self
    }

    pub fn config(self, config: &ServerConfig) -> Self {
        self.address(config.address())
    }

    pub fn router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    pub fn build(self) -> Result<Server, ServerBuildError> {
        let router = self.router.ok_or(ServerBuildError::MissingRouter)?;
        let address = self.address.ok_or(ServerBuildError::MissingAddress)?;
        Ok(Server { router: Arc::new(router), address })
    }
}

#[derive(Error, Debug)]
pub enum ServerBuildError {
    #[error("router must be set")]
    MissingRouter,
    #[error("address must be set")]
    MissingAddress,
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("invalid server setup: {source}")]
    Build {
        #[from]
        source: ServerBuildError,
    },

    #[error("can't bind {address}: {source}")]
    Bind { address: SocketAddr, source: io::Error },
}

#[derive(Debug)]
pub struct Server {
    router: Arc<Router>,
    address: SocketAddr,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::new()
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    /// Binds the configured address and serves until ctrl-c.
    pub async fn start(self) -> Result<(), ServerError> {
        let tcp_listener =
            TcpListener::bind(self.address).await.map_err(|source| ServerError::Bind { address: self.address, source })?;

        info!(address = %self.address, "start listening");
        self.serve_with_shutdown(tcp_listener, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(cause = %e, "can't listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await;
        Ok(())
    }

    /// Accepts connections on `tcp_listener` until `shutdown` completes.
    ///
    /// Each connection is served on its own task; connections already accepted
    /// keep running after the loop stops.
    pub async fn serve_with_shutdown(self, tcp_listener: TcpListener, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);

        loop {
            let (tcp_stream, remote_addr) = tokio::select! {
                accepted = tcp_listener.accept() => match accepted {
                    Ok(stream_and_addr) => stream_and_addr,
                    Err(e) => {
                        warn!(cause = %e, "failed to accept");
                        continue;
                    }
                },
                () = &mut shutdown => {
                    info!("shutdown signal received, stop accepting");
                    return;
                }
            };

            tokio::spawn(serve_connection(tcp_stream, remote_addr, Arc::clone(&self.router)));
        }
    }
}

async fn serve_connection(tcp_stream: TcpStream, remote_addr: SocketAddr, router: Arc<Router>) {
    info!(%remote_addr, "client connected");

    let (reader, writer) = tcp_stream.into_split();
    let connection = HttpConnection::new(reader, writer);
    match connection.process(router).await {
        Ok(()) => info!(%remote_addr, "client disconnected"),
        Err(e) => error!(%remote_addr, cause = %e, "connection error, client disconnected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::default_router;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::sync::oneshot;
    use tokio::task::JoinHandle;

    struct RunningServer {
        address: SocketAddr,
        stop_tx: oneshot::Sender<()>,
        serving: JoinHandle<()>,
    }

    impl RunningServer {
        async fn start() -> Self {
            let tcp_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let address = tcp_listener.local_addr().unwrap();
            let server = Server::builder().router(default_router()).address(address).build().unwrap();

            let (stop_tx, stop_rx) = oneshot::channel::<()>();
            let serving = tokio::spawn(server.serve_with_shutdown(tcp_listener, async move {
                let _ = stop_rx.await;
            }));
            Self { address, stop_tx, serving }
        }

        async fn exchange(&self, request: &[u8]) -> Vec<u8> {
            let mut stream = TcpStream::connect(self.address).await.unwrap();
            stream.write_all(request).await.unwrap();
            let mut response = Vec::new();
            stream.read_to_end(&mut response).await.unwrap();
            response
        }

        async fn stop(self) {
            self.stop_tx.send(()).unwrap();
            self.serving.await.unwrap();
        }
    }

    async fn round_trip(request: &[u8]) -> Vec<u8> {
        let server = RunningServer::start().await;
        let response = server.exchange(request).await;
        server.stop().await;
        response
    }

    #[tokio::test]
    async fn serves_hello_world() {
        let response = round_trip(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        assert_eq!(response, b"HTTP/1.1 200\r\nContent-Type: application/json\r\n\r\n{\"hello\":\"world\"}");
    }

    #[tokio::test]
    async fn serves_not_found() {
        let response = round_trip(b"GET /missing HTTP/1.1\r\n\r\n").await;
        let response = String::from_utf8(response).unwrap();

        assert!(response.starts_with("HTTP/1.1 404\r\nContent-Type: text/html\r\n\r\n"));
        assert!(response.contains("Cannot GET /missing"));
    }

    #[tokio::test]
    async fn invalid_json_is_bad_request() {
        let response = round_trip(b"POST / HTTP/1.1\r\nContent-Type: application/json\r\n\r\n{oops").await;
        assert_eq!(response, b"HTTP/1.1 400\r\nContent-Type: text/html\r\n\r\n");
    }

    #[tokio::test]
    async fn failed_connections_leave_server_running() {
        let server = RunningServer::start().await;

        let response = server.exchange(b"POST / HTTP/1.1\r\nContent-Type: application/json\r\n\r\n{oops").await;
        assert_eq!(response, b"HTTP/1.1 400\r\nContent-Type: text/html\r\n\r\n");

        // a client that leaves without sending anything
        drop(TcpStream::connect(server.address).await.unwrap());

        // a client that sends half a header block, then leaves
        let mut stream = TcpStream::connect(server.address).await.unwrap();
        stream.write_all(b"GET / HT").await.unwrap();
        drop(stream);

        let response = server.exchange(b"GET / HTTP/1.1\r\n\r\n").await;
        assert_eq!(response, b"HTTP/1.1 200\r\nContent-Type: application/json\r\n\r\n{\"hello\":\"world\"}");

        server.stop().await;
    }

    #[tokio::test]
    async fn connections_are_served_concurrently() {
        let server = RunningServer::start().await;

        // an idle client holds its connection open while another is answered
        let mut idle = TcpStream::connect(server.address).await.unwrap();
        idle.write_all(b"GET /idle HTTP/1.1\r\n").await.unwrap();

        let response = server.exchange(b"GET / HTTP/1.1\r\n\r\n").await;
        assert!(response.starts_with(b"HTTP/1.1 200\r\n"));

        idle.write_all(b"\r\n").await.unwrap();
        let mut response = Vec::new();
        idle.read_to_end(&mut response).await.unwrap();
        assert!(response.starts_with(b"HTTP/1.1 404\r\n"));

        server.stop().await;
    }

    #[test]
    fn build_requires_router_and_address() {
        let missing_router = Server::builder().address("127.0.0.1:0".parse().unwrap()).build();
        assert!(matches!(missing_router, Err(ServerBuildError::MissingRouter)));

        let missing_address = Server::builder().router(default_router()).build();
        assert!(matches!(missing_address, Err(ServerBuildError::MissingAddress)));
    }

    #[test]
    fn config_sets_address() {
        let config = ServerConfig::new("127.0.0.1".parse().unwrap(), 8080);
        let server = Server::builder().router(default_router()).config(&config).build().unwrap();
        assert_eq!(server.address(), "127.0.0.1:8080".parse().unwrap());
    }

    #[tokio::test]
    async fn bind_conflict_is_error() {
        let tcp_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = tcp_listener.local_addr().unwrap();
        let server = Server::builder().router(default_router()).address(address).build().unwrap();

        let error = server.start().await.unwrap_err();
        assert!(matches!(error, ServerError::Bind { address: bound, .. } if bound == address));
    }
}
