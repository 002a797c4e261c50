//! Mock conversation shown when the message screen opens.

use crate::{domain::message::Message, infra::config::ConversationConfig};

/// Title and initial messages for a new conversation screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSeed {
    pub title: String,
    pub messages: Vec<Message>,
}

impl ConversationSeed {
    pub fn from_config(config: &ConversationConfig) -> Self {
        let messages = if config.seed_messages {
            mock_messages()
        } else {
            Vec::new()
        };

        Self {
            title: config.contact_name.clone(),
            messages,
        }
    }
}

impl Default for ConversationSeed {
    fn default() -> Self {
        Self::from_config(&ConversationConfig::default())
    }
}

pub fn mock_messages() -> Vec<Message> {
    vec![
        Message::received("Olá! Tudo bem?"),
        Message::sent("Tudo ótimo, e com você?"),
        Message::received("Estou bem também! Que bom!"),
        Message::sent("O que você está fazendo?"),
        Message::received("Estou codificando em Compose!"),
        Message::sent("Que legal! Me mostra o código?"),
    ]
}
