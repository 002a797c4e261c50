use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, ConversationConfig, LogConfig, UiConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub conversation: Option<FileConversationConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(conversation) = self.conversation {
            conversation.merge_into(&mut config.conversation);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConversationConfig {
    pub contact_name: Option<String>,
    pub seed_messages: Option<bool>,
}

impl FileConversationConfig {
    fn merge_into(self, config: &mut ConversationConfig) {
        if let Some(contact_name) = self.contact_name {
            config.contact_name = contact_name;
        }

        if let Some(seed_messages) = self.seed_messages {
            config.seed_messages = seed_messages;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub bubble_max_width: Option<u16>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(width) = self.bubble_max_width {
            config.bubble_max_width = width;
        }
    }
}
