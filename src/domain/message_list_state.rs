//! Append-only message list with change notification.

use std::{fmt, rc::Rc};

use super::message::{Direction, Message};

/// Receives a notification after every append to a [`MessageListState`].
pub trait MessageListObserver {
    /// Called with the index the message was stored at.
    fn message_appended(&self, index: usize, message: &Message);
}

/// Ordered messages of one conversation.
///
/// Records are only ever appended; stored order is creation order.
#[derive(Default)]
pub struct MessageListState {
    messages: Vec<Message>,
    observers: Vec<Rc<dyn MessageListObserver>>,
}

impl MessageListState {
    /// Builds a list from existing records, in order.
    ///
    /// Records go through the regular append operations; nobody is
    /// subscribed yet, so nothing is notified.
    pub fn with_messages(messages: Vec<Message>) -> Self {
        let mut list = Self::default();
        for message in messages {
            match message.direction {
                Direction::Sent => list.append(message.text),
                Direction::Received => list.push_received(message.text),
            }
        }
        list
    }

    /// Messages in stored (chronological) order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Newest first. Used by layouts that stack from the bottom up.
    pub fn display_order(&self) -> impl Iterator<Item = &Message> + '_ {
        self.messages.iter().rev()
    }

    pub fn subscribe(&mut self, observer: Rc<dyn MessageListObserver>) {
        self.observers.push(observer);
    }

    /// Appends a message written by the local user.
    ///
    /// Callers are expected to reject blank text before calling this.
    pub fn append(&mut self, text: impl Into<String>) {
        self.push(Message::sent(text));
    }

    /// Appends a message from the contact.
    pub fn push_received(&mut self, text: impl Into<String>) {
        self.push(Message::received(text));
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);

        let index = self.messages.len() - 1;
        let stored = &self.messages[index];
        for observer in &self.observers {
            observer.message_appended(index, stored);
        }
    }
}

impl fmt::Debug for MessageListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageListState")
            .field("messages", &self.messages)
            .field("observers", &self.observers.len())
            .finish()
    }
}
