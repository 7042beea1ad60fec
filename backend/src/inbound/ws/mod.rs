//! WebSocket inbound adapter delivering completion events to clients.
//!
//! Responsibilities:
//! - upgrade `/` and `/ws` requests and register the connection with the
//!   push hub
//! - run the per-connection session (heartbeats, push frames)
//! - keep WebSocket-specific concerns at the edge of the system

use actix_web::web::{self, Payload};
use actix_web::{HttpRequest, HttpResponse, Resource};
use tracing::{debug, error};

mod session;

pub mod messages;
pub mod state;

/// Paths that accept a push connection.
///
/// Browser clients connect to the bare origin (`ws://host:3000`), so the root
/// path upgrades as well as `/ws`.
pub const WS_PATHS: [&str; 2] = ["/", "/ws"];

/// Resource mounting [`ws_entry`] on every path in [`WS_PATHS`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use showcase_backend::inbound::ws::ws_resource;
///
/// let _app = App::new().service(ws_resource());
/// ```
pub fn ws_resource() -> Resource {
    web::resource(WS_PATHS).route(web::get().to(ws_entry))
}

/// Handle a WebSocket upgrade.
///
/// The subscription is registered before the upgrade response is returned,
/// so events published after the handshake completes are never missed.
pub async fn ws_entry(
    state: web::Data<state::WsState>,
    req: HttpRequest,
    stream: Payload,
) -> actix_web::Result<HttpResponse> {
    let (response, session, messages) = actix_ws::handle(&req, stream).map_err(|error| {
        error!(error = %error, "WebSocket upgrade failed");
        error
    })?;

    let subscription = state.hub.subscribe();
    debug!(subscriber = subscription.id(), "push connection opened");
    actix_web::rt::spawn(session::handle_ws_session(
        state.hub.clone(),
        subscription,
        session,
        messages,
    ));
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use std::sync::Arc;

    use crate::outbound::push::PushHub;

    #[rstest]
    #[case("/")]
    #[case("/ws")]
    #[actix_web::test]
    async fn plain_requests_are_rejected_without_subscribing(#[case] path: &str) {
        let hub = Arc::new(PushHub::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state::WsState::new(hub.clone())))
                .service(ws_resource()),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(path).to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[rstest]
    #[case("/")]
    #[case("/ws")]
    #[actix_web::test]
    async fn upgrade_requests_switch_protocols(#[case] path: &str) {
        let hub = Arc::new(PushHub::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state::WsState::new(hub.clone())))
                .service(ws_resource()),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(path)
                .insert_header((header::CONNECTION, "upgrade"))
                .insert_header((header::UPGRADE, "websocket"))
                .insert_header((header::SEC_WEBSOCKET_VERSION, "13"))
                .insert_header((header::SEC_WEBSOCKET_KEY, "dGhlIHNhbXBsZSBub25jZQ=="))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SWITCHING_PROTOCOLS);
    }
}
