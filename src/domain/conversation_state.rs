use super::{
    message::Message, message_input_state::MessageInputState,
    message_list_state::MessageListState,
};

/// Everything the message screen owns. Dropped when the screen goes away.
#[derive(Debug)]
pub struct ConversationState {
    title: String,
    messages: MessageListState,
    input: MessageInputState,
    /// Lines scrolled up from the newest message.
    scroll_offset: usize,
}

impl ConversationState {
    pub fn new(title: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            title: title.into(),
            messages: MessageListState::with_messages(messages),
            input: MessageInputState::default(),
            scroll_offset: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &MessageListState {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut MessageListState {
        &mut self.messages
    }

    pub fn input(&self) -> &MessageInputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut MessageInputState {
        &mut self.input
    }

    /// Sends the current input as a new message.
    ///
    /// Returns false (and changes nothing) when the input is blank.
    pub fn submit(&mut self) -> bool {
        let Some(text) = self.input.take_submission() else {
            return false;
        };

        self.messages.append(text);
        self.scroll_to_bottom();
        true
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scrolls towards older messages.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    /// Scrolls towards newer messages.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Keeps the offset within what the rendered content allows.
    pub fn clamp_scroll(&mut self, max_offset: usize) {
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}
