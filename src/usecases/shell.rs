use std::rc::Rc;

use anyhow::Result;

use crate::domain::{
    conversation_state::ConversationState,
    events::{AppEvent, KeyInput},
    login_form_state::LoginAction,
    message_input_state::MessageInputState,
    message_list_state::MessageListObserver,
    shell_state::{Screen, ShellState},
};

use super::{
    contracts::{LoginHandler, Navigation, ShellOrchestrator},
    seed::ConversationSeed,
};

/// Lines moved by PageUp/PageDown in the message list.
const PAGE_SCROLL_LINES: usize = 10;

pub struct DefaultShellOrchestrator<L>
where
    L: LoginHandler,
{
    state: ShellState,
    login_handler: L,
    seed: ConversationSeed,
    observers: Vec<Rc<dyn MessageListObserver>>,
}

impl<L> DefaultShellOrchestrator<L>
where
    L: LoginHandler,
{
    pub fn new(login_handler: L, seed: ConversationSeed) -> Self {
        Self {
            state: ShellState::default(),
            login_handler,
            seed,
            observers: Vec::new(),
        }
    }

    fn handle_login_key(&mut self, key: &KeyInput) -> Result<()> {
        let Screen::Login(form) = self.state.screen_mut() else {
            return Ok(());
        };

        let action = match key.key.as_str() {
            "tab" | "down" => {
                form.focus_next();
                None
            }
            "backtab" | "up" => {
                form.focus_previous();
                None
            }
            "enter" => form.activate(),
            _ => {
                if let Some(field) = form.focused_field_mut() {
                    edit_field(field, key);
                }
                None
            }
        };

        let navigation = match action {
            Some(LoginAction::Login) => self.login_handler.on_login()?,
            Some(LoginAction::Register) => self.login_handler.on_register()?,
            None => return Ok(()),
        };

        if navigation == Navigation::OpenMessages {
            self.open_messages();
        }

        Ok(())
    }

    fn handle_messages_key(&mut self, key: &KeyInput) {
        let Some(conversation) = self.state.conversation_mut() else {
            return;
        };

        match (key.key.as_str(), key.ctrl) {
            ("enter", _) => {
                conversation.submit();
            }
            ("up", _) => conversation.scroll_up(1),
            ("down", _) => conversation.scroll_down(1),
            ("pageup", _) => conversation.scroll_up(PAGE_SCROLL_LINES),
            ("pagedown", _) => conversation.scroll_down(PAGE_SCROLL_LINES),
            ("end", true) => conversation.scroll_to_bottom(),
            _ => edit_field(conversation.input_mut(), key),
        }
    }

    fn open_messages(&mut self) {
        let mut conversation =
            ConversationState::new(self.seed.title.clone(), self.seed.messages.clone());
        for observer in &self.observers {
            conversation.messages_mut().subscribe(Rc::clone(observer));
        }

        tracing::info!(
            contact = conversation.title(),
            seeded = conversation.messages().len(),
            "opening conversation"
        );
        self.state.show(Screen::Messages(conversation));
    }
}

/// Applies an editing key to a text field; other keys are ignored.
fn edit_field(field: &mut MessageInputState, key: &KeyInput) {
    if let Some(ch) = key.printable_char() {
        field.insert_char(ch);
        return;
    }

    match key.key.as_str() {
        "backspace" => field.delete_char_before(),
        "delete" => field.delete_char_at(),
        "left" => field.move_cursor_left(),
        "right" => field.move_cursor_right(),
        "home" => field.move_cursor_home(),
        "end" => field.move_cursor_end(),
        _ => {}
    }
}

impl<L> ShellOrchestrator for DefaultShellOrchestrator<L>
where
    L: LoginHandler,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn subscribe(&mut self, observer: Rc<dyn MessageListObserver>) {
        if let Some(conversation) = self.state.conversation_mut() {
            conversation.messages_mut().subscribe(Rc::clone(&observer));
        }
        self.observers.push(observer);
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick | AppEvent::Resized => {}
            AppEvent::QuitRequested => {
                tracing::info!("quit requested");
                self.state.stop();
            }
            AppEvent::InputKey(key) => {
                if matches!(self.state.screen(), Screen::Login(_)) {
                    self.handle_login_key(&key)?;
                } else {
                    self.handle_messages_key(&key);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::domain::{
        login_form_state::LoginFocus,
        message::{Direction, Message},
    };

    #[derive(Default)]
    struct RecordingLoginHandler {
        calls: Vec<&'static str>,
        register_navigation: Option<Navigation>,
    }

    impl LoginHandler for RecordingLoginHandler {
        fn on_login(&mut self) -> Result<Navigation> {
            self.calls.push("login");
            Ok(Navigation::OpenMessages)
        }

        fn on_register(&mut self) -> Result<Navigation> {
            self.calls.push("register");
            Ok(self.register_navigation.unwrap_or(Navigation::Stay))
        }
    }

    struct FailingLoginHandler;

    impl LoginHandler for FailingLoginHandler {
        fn on_login(&mut self) -> Result<Navigation> {
            anyhow::bail!("login backend unavailable")
        }

        fn on_register(&mut self) -> Result<Navigation> {
            Ok(Navigation::Stay)
        }
    }

    #[derive(Default)]
    struct CountingObserver {
        count: Cell<usize>,
        texts: RefCell<Vec<String>>,
    }

    impl MessageListObserver for CountingObserver {
        fn message_appended(&self, _index: usize, message: &Message) {
            self.count.set(self.count.get() + 1);
            self.texts.borrow_mut().push(message.text.clone());
        }
    }

    fn orchestrator() -> DefaultShellOrchestrator<RecordingLoginHandler> {
        DefaultShellOrchestrator::new(RecordingLoginHandler::default(), ConversationSeed::default())
    }

    fn key(name: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(name, false))
    }

    fn send_keys<L: LoginHandler>(orchestrator: &mut DefaultShellOrchestrator<L>, keys: &[&str]) {
        for name in keys {
            orchestrator
                .handle_event(key(name))
                .expect("key must be handled");
        }
    }

    fn type_text<L: LoginHandler>(orchestrator: &mut DefaultShellOrchestrator<L>, text: &str) {
        for ch in text.chars() {
            orchestrator
                .handle_event(key(&ch.to_string()))
                .expect("char must be handled");
        }
    }

    fn logged_in() -> DefaultShellOrchestrator<RecordingLoginHandler> {
        let mut orchestrator = orchestrator();
        send_keys(&mut orchestrator, &["tab", "tab", "enter"]);
        orchestrator
    }

    fn input_text<L: LoginHandler>(orchestrator: &DefaultShellOrchestrator<L>) -> String {
        orchestrator
            .state()
            .conversation()
            .expect("conversation must be open")
            .input()
            .text()
            .to_owned()
    }

    fn message_count<L: LoginHandler>(orchestrator: &DefaultShellOrchestrator<L>) -> usize {
        orchestrator
            .state()
            .conversation()
            .expect("conversation must be open")
            .messages()
            .len()
    }

    #[test]
    fn stops_on_quit_event() {
        let mut orchestrator = orchestrator();

        orchestrator
            .handle_event(AppEvent::QuitRequested)
            .expect("event must be handled");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn keeps_running_on_tick_and_resize() {
        let mut orchestrator = orchestrator();

        orchestrator
            .handle_event(AppEvent::Tick)
            .expect("tick must be handled");
        orchestrator
            .handle_event(AppEvent::Resized)
            .expect("resize must be handled");

        assert!(orchestrator.state().is_running());
        assert!(matches!(orchestrator.state().screen(), Screen::Login(_)));
    }

    #[test]
    fn typing_on_login_fills_focused_field() {
        let mut orchestrator = orchestrator();
        type_text(&mut orchestrator, "ana");
        send_keys(&mut orchestrator, &["tab"]);
        type_text(&mut orchestrator, "pw");

        let Screen::Login(form) = orchestrator.state().screen() else {
            panic!("login screen expected");
        };
        assert_eq!(form.username().text(), "ana");
        assert_eq!(form.password().text(), "pw");
        assert_eq!(form.focus(), LoginFocus::Password);
    }

    #[test]
    fn login_button_invokes_handler_and_opens_messages() {
        let orchestrator = logged_in();

        assert_eq!(orchestrator.login_handler.calls, vec!["login"]);
        let conversation = orchestrator
            .state()
            .conversation()
            .expect("conversation must be open");
        assert_eq!(conversation.title(), "Nome do Contato");
        assert_eq!(conversation.messages().len(), 6);
        assert_eq!(conversation.input().text(), "");
    }

    #[test]
    fn register_button_invokes_handler_and_stays() {
        let mut orchestrator = orchestrator();

        send_keys(&mut orchestrator, &["backtab", "enter"]);

        assert_eq!(orchestrator.login_handler.calls, vec!["register"]);
        assert!(matches!(orchestrator.state().screen(), Screen::Login(_)));
    }

    #[test]
    fn navigation_follows_handler_answer() {
        let handler = RecordingLoginHandler {
            register_navigation: Some(Navigation::OpenMessages),
            ..RecordingLoginHandler::default()
        };
        let mut orchestrator = DefaultShellOrchestrator::new(handler, ConversationSeed::default());

        send_keys(&mut orchestrator, &["backtab", "enter"]);

        assert!(orchestrator.state().conversation().is_some());
    }

    #[test]
    fn login_handler_errors_propagate() {
        let mut orchestrator =
            DefaultShellOrchestrator::new(FailingLoginHandler, ConversationSeed::default());
        send_keys(&mut orchestrator, &["tab", "tab"]);

        let result = orchestrator.handle_event(key("enter"));

        assert!(result.is_err());
        assert!(matches!(orchestrator.state().screen(), Screen::Login(_)));
    }

    #[test]
    fn appending_oi_to_seeded_conversation() {
        let mut orchestrator = logged_in();

        type_text(&mut orchestrator, "Oi");
        send_keys(&mut orchestrator, &["enter"]);

        let conversation = orchestrator
            .state()
            .conversation()
            .expect("conversation must be open");
        let messages = conversation.messages().messages();
        assert_eq!(messages.len(), 7);
        assert_eq!(messages[6].text, "Oi");
        assert_eq!(messages[6].direction, Direction::Sent);
    }

    #[test]
    fn submit_gate_follows_input_contents() {
        let mut orchestrator = logged_in();
        let can_submit = |o: &DefaultShellOrchestrator<RecordingLoginHandler>| {
            o.state()
                .conversation()
                .expect("conversation must be open")
                .input()
                .can_submit()
        };

        assert!(!can_submit(&orchestrator));
        type_text(&mut orchestrator, "a");
        assert!(can_submit(&orchestrator));

        send_keys(&mut orchestrator, &["enter"]);

        assert_eq!(message_count(&orchestrator), 7);
        assert_eq!(input_text(&orchestrator), "");
        assert!(!can_submit(&orchestrator));
    }

    #[test]
    fn blank_enter_does_not_append() {
        let mut orchestrator = logged_in();
        type_text(&mut orchestrator, "   ");

        send_keys(&mut orchestrator, &["enter"]);

        assert_eq!(message_count(&orchestrator), 6);
        assert_eq!(input_text(&orchestrator), "   ");
    }

    #[test]
    fn editing_keys_reach_message_input() {
        let mut orchestrator = logged_in();
        type_text(&mut orchestrator, "abc");

        send_keys(&mut orchestrator, &["left", "backspace", "home", "delete"]);

        assert_eq!(input_text(&orchestrator), "c");
    }

    #[test]
    fn scroll_keys_move_offset_and_ctrl_end_returns_to_bottom() {
        let mut orchestrator = logged_in();

        send_keys(&mut orchestrator, &["pageup", "up", "down"]);
        let offset = |o: &DefaultShellOrchestrator<RecordingLoginHandler>| {
            o.state()
                .conversation()
                .expect("conversation must be open")
                .scroll_offset()
        };
        assert_eq!(offset(&orchestrator), PAGE_SCROLL_LINES);

        orchestrator
            .handle_event(AppEvent::InputKey(KeyInput::new("end", true)))
            .expect("ctrl+end must be handled");
        assert_eq!(offset(&orchestrator), 0);
    }

    #[test]
    fn observers_subscribed_before_login_see_appends() {
        let observer = Rc::new(CountingObserver::default());
        let mut orchestrator = orchestrator();
        orchestrator.subscribe(observer.clone());

        send_keys(&mut orchestrator, &["tab", "tab", "enter"]);
        type_text(&mut orchestrator, "Oi");
        send_keys(&mut orchestrator, &["enter"]);

        assert_eq!(observer.count.get(), 1);
        assert_eq!(*observer.texts.borrow(), vec!["Oi".to_owned()]);
    }

    #[test]
    fn observers_subscribed_after_login_see_appends() {
        let observer = Rc::new(CountingObserver::default());
        let mut orchestrator = logged_in();
        orchestrator.subscribe(observer.clone());

        type_text(&mut orchestrator, "x");
        send_keys(&mut orchestrator, &["enter"]);

        assert_eq!(observer.count.get(), 1);
    }
}
