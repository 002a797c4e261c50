use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub conversation: ConversationConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Log file path. `None` means `<cache dir>/openchat/openchat.log`.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationConfig {
    pub contact_name: String,
    /// Start the conversation with the mock exchange.
    pub seed_messages: bool,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            contact_name: "Nome do Contato".to_owned(),
            seed_messages: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub bubble_max_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bubble_max_width: 48,
        }
    }
}
