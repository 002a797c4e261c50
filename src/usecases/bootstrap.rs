use std::{path::Path, rc::Rc};

use crate::{
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError},
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        message_log::MessageLogObserver,
        navigation::DefaultLoginHandler,
        seed::ConversationSeed,
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(&FileConfigAdapter::new(config_path))?;
    infra::logging::init(&context.config.logging)?;

    tracing::debug!(config = ?context.config, "configuration loaded");
    Ok(context)
}

fn build_context(config_adapter: &dyn ConfigAdapter) -> Result<AppContext, AppError> {
    let config = config_adapter.load().map_err(AppError::Other)?;

    Ok(AppContext::new(config))
}

pub fn compose_shell(context: &AppContext) -> ShellComposition {
    ShellComposition {
        event_source: Box::new(CrosstermEventSource),
        orchestrator: Box::new(compose_orchestrator(context)),
    }
}

fn compose_orchestrator(context: &AppContext) -> DefaultShellOrchestrator<DefaultLoginHandler> {
    let seed = ConversationSeed::from_config(&context.config.conversation);
    let mut orchestrator = DefaultShellOrchestrator::new(DefaultLoginHandler, seed);
    orchestrator.subscribe(Rc::new(MessageLogObserver));
    orchestrator
}
