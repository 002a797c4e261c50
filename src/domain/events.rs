#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    Resized,
    QuitRequested,
    InputKey(KeyInput),
}

/// A key press normalized to a name: printable characters are the character
/// itself, special keys use lowercase names such as `enter` or `pageup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// Returns the typed character when the key is a single printable char
    /// pressed without Ctrl.
    pub fn printable_char(&self) -> Option<char> {
        if self.ctrl {
            return None;
        }

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_control() => Some(ch),
            _ => None,
        }
    }
}
