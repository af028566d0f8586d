use crate::service::QuoteService;
use messaging::MessageBus;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QuoteService>,
}

impl AppState {
    pub fn new(bus: Arc<dyn MessageBus>) -> Self {
        Self {
            service: Arc::new(QuoteService::new(bus)),
        }
    }
}
