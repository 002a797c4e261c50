use super::{conversation_state::ConversationState, login_form_state::LoginFormState};

#[derive(Debug)]
pub enum Screen {
    Login(LoginFormState),
    Messages(ConversationState),
}

#[derive(Debug)]
pub struct ShellState {
    running: bool,
    screen: Screen,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            screen: Screen::Login(LoginFormState::default()),
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Replaces the current screen, dropping whatever it owned.
    pub fn show(&mut self, screen: Screen) {
        self.screen = screen;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn conversation(&self) -> Option<&ConversationState> {
        match &self.screen {
            Screen::Messages(conversation) => Some(conversation),
            Screen::Login(_) => None,
        }
    }

    pub fn conversation_mut(&mut self) -> Option<&mut ConversationState> {
        match &mut self.screen {
            Screen::Messages(conversation) => Some(conversation),
            Screen::Login(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_on_login_screen() {
        let state = ShellState::default();

        assert!(state.is_running());
        assert!(matches!(state.screen(), Screen::Login(_)));
        assert!(state.conversation().is_none());
    }

    #[test]
    fn show_replaces_screen() {
        let mut state = ShellState::default();

        state.show(Screen::Messages(ConversationState::new("Contato", vec![])));

        assert_eq!(
            state.conversation().map(ConversationState::title),
            Some("Contato")
        );
    }

    #[test]
    fn stop_ends_the_loop() {
        let mut state = ShellState::default();

        state.stop();

        assert!(!state.is_running());
    }
}
