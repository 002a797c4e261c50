//! Default wiring of the login screen actions.

use anyhow::Result;

use super::contracts::{LoginHandler, Navigation};

/// Opens the conversation on login. Registration has no backing flow, so it
/// keeps the user on the login screen.
#[derive(Debug, Clone, Default)]
pub struct DefaultLoginHandler;

impl LoginHandler for DefaultLoginHandler {
    fn on_login(&mut self) -> Result<Navigation> {
        tracing::info!("login requested, opening conversation");
        Ok(Navigation::OpenMessages)
    }

    fn on_register(&mut self) -> Result<Navigation> {
        tracing::info!("register requested, no registration flow available");
        Ok(Navigation::Stay)
    }
}
