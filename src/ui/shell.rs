use std::{cell::Cell, rc::Rc};

use anyhow::Result;

use crate::{
    domain::{
        events::AppEvent,
        message::Message,
        message_list_state::MessageListObserver,
        shell_state::ShellState,
    },
    infra::config::UiConfig,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

/// Raised by message list changes, consumed by the draw loop.
#[derive(Debug, Default)]
pub struct RedrawSignal {
    pending: Cell<bool>,
}

impl RedrawSignal {
    pub fn take(&self) -> bool {
        self.pending.replace(false)
    }
}

impl MessageListObserver for RedrawSignal {
    fn message_appended(&self, _index: usize, _message: &Message) {
        self.pending.set(true);
    }
}

/// Something the shell loop can draw a frame on.
pub trait FrameSink {
    fn draw_state(&mut self, state: &mut ShellState, ui: &UiConfig) -> Result<()>;
}

impl FrameSink for TerminalSession {
    fn draw_state(&mut self, state: &mut ShellState, ui: &UiConfig) -> Result<()> {
        self.draw(|frame| view::render(frame, state, ui))
    }
}

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        contact = %context.config.conversation.contact_name,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(&mut terminal, context, event_source, orchestrator)?;

    tracing::info!("TUI shell stopped");
    Ok(())
}

fn run_loop(
    sink: &mut dyn FrameSink,
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    let redraw = Rc::new(RedrawSignal::default());
    orchestrator.subscribe(redraw.clone());

    let mut needs_draw = true;
    while orchestrator.state().is_running() {
        if redraw.take() || needs_draw {
            sink.draw_state(orchestrator.state_mut(), &context.config.ui)?;
        }

        match event_source.next_event()? {
            Some(event) => {
                needs_draw = event != AppEvent::Tick;
                orchestrator.handle_event(event)?;
            }
            None => needs_draw = false,
        }
    }

    Ok(())
}
