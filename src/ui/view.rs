use ratatui::Frame;

use crate::{
    domain::shell_state::{Screen, ShellState},
    infra::config::UiConfig,
};

use super::{login_view::render_login_screen, messages_view::render_messages_screen};

pub fn render(frame: &mut Frame<'_>, state: &mut ShellState, ui: &UiConfig) {
    let area = frame.area();

    match state.screen_mut() {
        Screen::Login(form) => render_login_screen(frame, area, form),
        Screen::Messages(conversation) => render_messages_screen(frame, area, conversation, ui),
    }
}
