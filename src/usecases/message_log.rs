use crate::domain::{message::Message, message_list_state::MessageListObserver};

/// Emits a debug record for every message added to a conversation.
#[derive(Debug, Default)]
pub struct MessageLogObserver;

impl MessageListObserver for MessageLogObserver {
    fn message_appended(&self, index: usize, message: &Message) {
        tracing::debug!(
            index,
            direction = message.direction.as_label(),
            chars = message.text.chars().count(),
            "message appended"
        );
    }
}
