//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::usecase::DispatchMessageUseCase;

use super::{
    handler::{health_check, send_message},
    signal::shutdown_signal,
    state::AppState,
};

/// HTTP relay server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(dispatch_message_usecase);
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// DispatchMessageUseCase（メッセージディスパッチのユースケース）
    dispatch_message_usecase: Arc<DispatchMessageUseCase>,
}

impl Server {
    /// Create a new Server instance
    pub fn new(dispatch_message_usecase: Arc<DispatchMessageUseCase>) -> Self {
        Self {
            dispatch_message_usecase,
        }
    }

    /// Run the HTTP relay server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            dispatch_message_usecase: self.dispatch_message_usecase,
        });

        // Define handlers
        let app = Router::new()
            .route("/api/send-message", post(send_message))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!("Relay server listening on {}", listener.local_addr()?);
        tracing::info!("Send messages to: http://{}/api/send-message", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
