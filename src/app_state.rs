use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        completion_client::{CompletionClient, HttpCompletionClient},
        study_service::{ModelSettings, StudyService},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub study_service: Arc<StudyService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(HttpCompletionClient::new(&config));
        Self::with_client(config, client)
    }

    /// Wires the state around any completion backend, e.g. a stub in tests.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let study_service = Arc::new(StudyService::new(client, ModelSettings::from(&config)));

        Self {
            study_service,
            config: Arc::new(config),
        }
    }
}
