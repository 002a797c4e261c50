/// Which side of the conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Written by the local user.
    Sent,
    /// Written by the contact.
    Received,
}

impl Direction {
    pub fn as_label(self) -> &'static str {
        match self {
            Direction::Sent => "sent",
            Direction::Received => "received",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub direction: Direction,
}

impl Message {
    pub fn sent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            direction: Direction::Sent,
        }
    }

    pub fn received(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            direction: Direction::Received,
        }
    }
}
