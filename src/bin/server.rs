//! HTTP relay server publishing messages to an Ably channel.
//!
//! Receives a sender name over HTTP and publishes a text message on its behalf
//! to a fixed Ably channel. Requires the `ABLY_API_KEY` environment variable.
//!
//! Run with:
//! ```not_rust
//! ABLY_API_KEY=<keyName>:<keySecret> cargo run --bin server
//! ABLY_API_KEY=<keyName>:<keySecret> cargo run --bin server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use ably_relay::{
    common::logger::setup_logger, infrastructure::publisher::AblyRestPublisher, ui::Server,
    usecase::DispatchMessageUseCase,
};
use clap::Parser;

/// Environment variable holding the Ably API key.
const ABLY_API_KEY_ENV: &str = "ABLY_API_KEY";

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "HTTP relay server publishing messages to an Ably channel", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. MessagePublisher
    // 2. UseCases
    // 3. Server

    // 1. Create MessagePublisher (Ably REST implementation, shared across requests)
    let api_key = match std::env::var(ABLY_API_KEY_ENV) {
        Ok(api_key) => api_key,
        Err(_) => {
            tracing::error!("{} is not set", ABLY_API_KEY_ENV);
            std::process::exit(1);
        }
    };
    let publisher = match AblyRestPublisher::new(&api_key) {
        Ok(publisher) => Arc::new(publisher),
        Err(e) => {
            tracing::error!("Invalid {}: {}", ABLY_API_KEY_ENV, e);
            std::process::exit(1);
        }
    };

    // 2. Create UseCases
    let dispatch_message_usecase = Arc::new(DispatchMessageUseCase::new(publisher));

    // 3. Create and run the server
    let server = Server::new(dispatch_message_usecase);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
