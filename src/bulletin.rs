//! Values published from the console for the web service to show

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

/// Key the web service reads for its greeting
pub const MESSAGE_KEY: &str = "message";

/// Shared key/value board. Clones share the same values.
#[derive(Debug, Clone, Default)]
pub struct Bulletin {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl Bulletin {
    /// Board with an initial greeting; an empty greeting leaves it unset
    pub fn with_message(message: &str) -> Self {
        let mut values = HashMap::new();
        if !message.is_empty() {
            values.insert(MESSAGE_KEY.to_string(), message.to_string());
        }
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }

    /// Store `value` under `key`, returning what it replaced
    pub async fn set(&self, key: &str, value: &str) -> Option<String> {
        self.values.write().await.insert(key.to_string(), value.to_string())
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    pub async fn message(&self) -> Option<String> {
        self.get(MESSAGE_KEY).await
    }
}
