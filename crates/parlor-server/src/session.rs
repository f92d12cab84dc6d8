use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory store of logged-in session tokens.
///
/// Tokens live until logout or process exit; the login flow issues one per
/// successful password check and the cookie carries it back on every request.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token and record it as logged in.
    pub async fn issue(&self) -> String {
        let token = Uuid::new_v4().to_string();
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.clone());
        token
    }

    pub async fn contains(&self, token: &str) -> bool {
        let tokens = self.tokens.read().await;
        tokens.contains(token)
    }

    pub async fn revoke(&self, token: &str) -> bool {
        let mut tokens = self.tokens.write().await;
        tokens.remove(token)
    }
}
