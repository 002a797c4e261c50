//! UI layer: terminal rendering and input entry points.

mod event_source;
mod login_view;
mod message_input;
mod message_rendering;
mod messages_view;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
