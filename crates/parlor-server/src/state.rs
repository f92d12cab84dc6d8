use std::sync::Arc;

use parlor_llm::client::TextClient;
use parlor_llm::factory::create_client;
use parlor_llm::provider::Provider;

use crate::config::Config;
use crate::session::SessionStore;

/// Factory function type for creating TextClient instances.
pub type ClientFactory =
    Arc<dyn Fn(&Provider, String, String) -> Box<dyn TextClient> + Send + Sync>;

/// Create the default factory that delegates to parlor_llm::factory.
pub fn default_client_factory() -> ClientFactory {
    Arc::new(|provider, api_key, model_id| create_client(provider, api_key, model_id))
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
    pub clients: ClientFactory,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_factory(config, default_client_factory())
    }

    /// Create with a specific client factory (for testing).
    pub fn with_factory(config: Config, clients: ClientFactory) -> Self {
        Self {
            config: Arc::new(config),
            sessions: SessionStore::new(),
            clients,
        }
    }
}
