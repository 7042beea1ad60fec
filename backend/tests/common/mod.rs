//! Helpers for running the assembled server on an ephemeral port.

use std::net::TcpListener;

use actix_web::dev::ServerHandle;
use actix_web::web;
use showcase_backend::inbound::http::health::HealthState;
use showcase_backend::server::{AppComponents, ServerSettings, build_components, create_server};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A live server plus its queue worker.
pub struct RunningServer {
    pub base_url: String,
    pub components: AppComponents,
    handle: ServerHandle,
    shutdown: CancellationToken,
    _worker: JoinHandle<()>,
}

impl RunningServer {
    /// Start a server using `settings`; host and port are ignored.
    pub fn start(settings: &ServerSettings) -> Self {
        let components = build_components(settings).expect("build components");
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        let server = create_server(web::Data::new(HealthState::new()), &components, listener)
            .expect("create server");
        let handle = server.handle();
        actix_web::rt::spawn(server);

        let shutdown = CancellationToken::new();
        let worker = components.worker.clone().spawn(shutdown.clone());
        Self {
            base_url: format!("http://{addr}"),
            components,
            handle,
            shutdown,
            _worker: worker,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn stop(self) {
        self.shutdown.cancel();
        self.handle.stop(true).await;
    }
}

/// Settings with a tiny directory and no worker cool-down.
pub fn fast_settings() -> ServerSettings {
    ServerSettings {
        user_count: 5,
        user_seed: Some(1),
        stream_interval_ms: 1,
        stream_paragraphs: 1,
        result_paragraphs: 1,
        worker_min_delay_ms: 0,
        worker_max_delay_ms: 0,
        ..ServerSettings::default()
    }
}
