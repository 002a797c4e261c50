//! Focus and field contents of the login screen.
//!
//! The typed credentials are presentation only: nothing reads them back.

use super::message_input_state::MessageInputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Username,
    Password,
    LoginButton,
    RegisterButton,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 4] = [
        LoginFocus::Username,
        LoginFocus::Password,
        LoginFocus::LoginButton,
        LoginFocus::RegisterButton,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Action requested by activating a login screen button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    Login,
    Register,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginFormState {
    username: MessageInputState,
    password: MessageInputState,
    focus: LoginFocus,
}

impl LoginFormState {
    pub fn username(&self) -> &MessageInputState {
        &self.username
    }

    pub fn password(&self) -> &MessageInputState {
        &self.password
    }

    pub fn focus(&self) -> LoginFocus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Returns the field under focus, if focus is on a text field.
    pub fn focused_field_mut(&mut self) -> Option<&mut MessageInputState> {
        match self.focus {
            LoginFocus::Username => Some(&mut self.username),
            LoginFocus::Password => Some(&mut self.password),
            LoginFocus::LoginButton | LoginFocus::RegisterButton => None,
        }
    }

    /// Handles Enter: fields advance focus, buttons yield their action.
    pub fn activate(&mut self) -> Option<LoginAction> {
        match self.focus {
            LoginFocus::Username | LoginFocus::Password => {
                self.focus_next();
                None
            }
            LoginFocus::LoginButton => Some(LoginAction::Login),
            LoginFocus::RegisterButton => Some(LoginAction::Register),
        }
    }
}
