//! Builders wiring in-memory adapters into HTTP, WebSocket and worker state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tokio::sync::Notify;
use tracing::info;

use crate::domain::ports::{TextGenerator, WorkItemRepository};
use crate::domain::{QueueWorker, QueueWorkerPorts, TaskQueueService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::ws::state::WsState;
use crate::outbound::memory::{InMemoryUserDirectory, InMemoryWorkItemRepository};
use crate::outbound::push::PushHub;
use crate::outbound::text::LoremTextGenerator;

use super::{ServerSettings, StartupError};

/// Shared state handed to every app instance, plus the worker it feeds.
pub struct AppComponents {
    pub http_state: web::Data<HttpState>,
    pub ws_state: web::Data<WsState>,
    pub worker: Arc<QueueWorker>,
}

/// Generate the user directory and connect the queue, hub and worker.
///
/// # Errors
/// Returns [`StartupError`] when the settings are invalid or the directory
/// cannot be generated.
pub fn build_components(settings: &ServerSettings) -> Result<AppComponents, StartupError> {
    settings.validate()?;

    let seed = settings.user_seed();
    let directory = InMemoryUserDirectory::generate(seed, settings.user_count())?;
    info!(seed, users = directory.len(), "user directory ready");

    let repository: Arc<dyn WorkItemRepository> = Arc::new(InMemoryWorkItemRepository::new());
    let hub = Arc::new(PushHub::new());
    let text: Arc<dyn TextGenerator> = Arc::new(LoremTextGenerator);
    let wake = Arc::new(Notify::new());

    let queue = Arc::new(TaskQueueService::new(
        Arc::clone(&repository),
        Arc::new(DefaultClock),
        Arc::clone(&wake),
    ));
    let worker = Arc::new(QueueWorker::new(
        QueueWorkerPorts::new(repository, hub.clone(), Arc::clone(&text)),
        wake,
        settings.worker_config(),
    ));

    let http_state = HttpState::new(
        HttpStatePorts {
            users: Arc::new(directory),
            queue: queue.clone(),
            queue_query: queue,
            text,
        },
        settings.stream_settings(),
    );

    Ok(AppComponents {
        http_state: web::Data::new(http_state),
        ws_state: web::Data::new(WsState::new(hub)),
        worker,
    })
}
