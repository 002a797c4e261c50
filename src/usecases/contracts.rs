use std::rc::Rc;

use anyhow::Result;

use crate::domain::{
    events::AppEvent, message_list_state::MessageListObserver, shell_state::ShellState,
};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn state_mut(&mut self) -> &mut ShellState;
    /// Registers an observer on the current and every future conversation.
    fn subscribe(&mut self, observer: Rc<dyn MessageListObserver>);
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Where the shell should go after a login screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    OpenMessages,
}

/// Actions of the login screen, supplied by the embedding application.
pub trait LoginHandler {
    fn on_login(&mut self) -> Result<Navigation>;
    fn on_register(&mut self) -> Result<Navigation>;
}
