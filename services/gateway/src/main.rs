use gateway::consumer::consume_quotes;
use gateway::router::create_router;
use gateway::state::AppState;
use messaging::{InMemoryBus, MessageBus};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Gateway service");

    // The bus is the broker seam; swap in a real transport here.
    // InMemoryBus keeps the service runnable stand-alone.
    let bus: Arc<dyn MessageBus> = Arc::new(InMemoryBus::new());

    // Initialize application state
    let state = AppState::new(Arc::clone(&bus));

    // Quote-consumption task: quote channel -> quote registry
    let service = Arc::clone(&state.service);
    tokio::spawn(async move {
        if let Err(e) = consume_quotes(bus, service).await {
            tracing::error!(error = %e, "quote consumer stopped");
        }
    });

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
