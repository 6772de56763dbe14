use std::process::ExitCode;

use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;
use wisp_web::{Server, ServerConfig, ServerError, default_router};

#[tokio::main]
async fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(cause = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let server = Server::builder().router(default_router()).config(&config).build()?;
    server.start().await
}
