use messaging::{InMemoryBus, MessageBus};
use pricing_engine::{QuoteProcessor, RandomPriceModel};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Pricing Engine service");

    // The bus is the broker seam; swap in a real transport here.
    let bus: Arc<dyn MessageBus> = Arc::new(InMemoryBus::new());

    let processor = QuoteProcessor::new(bus, Arc::new(RandomPriceModel));
    processor.run().await?;

    Ok(())
}
