//! Route table and TCP server on top of `wisp-http`.
//!
//! ```no_run
//! use wisp_web::{Server, ServerConfig, default_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::from_env().unwrap();
//!     let server = Server::builder().router(default_router()).config(&config).build().unwrap();
//!     server.start().await.unwrap();
//! }
//! ```

mod config;
pub mod router;
mod routes;
mod server;

pub use config::{ConfigError, DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
pub use router::{Router, RouterBuilder};
pub use routes::{default_router, hello_world, not_found};
pub use server::{Server, ServerBuildError, ServerBuilder, ServerError};
