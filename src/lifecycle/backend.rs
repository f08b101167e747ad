use crate::api::{self, AppState};
use crate::lifecycle::Config;
use crate::order_service::OrderService;
use crate::store::{FileOrderStore, OrderStore};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// The assembled backend: store, order service and HTTP router.
///
/// `Backend` is responsible for:
/// - **Dependency Wiring**: the service gets its store, the router gets the service
/// - **Lifecycle Management**: binding the listener and shutting down gracefully
///
/// # Example
///
/// ```ignore
/// let backend = Backend::new(Config::from_env()?);
/// backend.serve().await?;
/// ```
pub struct Backend {
    config: Config,
    orders: OrderService,
}

impl Backend {
    /// Wires a [`FileOrderStore`] at `config.orders_file`.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(FileOrderStore::new(config.orders_file.clone()));
        Self::with_store(config, store)
    }

    /// Wires an arbitrary store, e.g. a [`MemoryOrderStore`](crate::store::MemoryOrderStore) in tests.
    pub fn with_store(config: Config, store: Arc<dyn OrderStore>) -> Self {
        let orders = OrderService::new(store, config.totals);
        Self { config, orders }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn order_service(&self) -> &OrderService {
        &self.orders
    }

    pub fn router(&self) -> Router {
        api::router(AppState::new(self.orders.clone()))
    }

    /// Binds `config.bind_addr` and serves until Ctrl-C.
    pub async fn serve(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serves on an already bound listener until `shutdown` resolves.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(addr = %listener.local_addr()?, orders_file = %self.config.orders_file.display(), "Server running");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server shutdown complete.");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed.
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down server...");
}
