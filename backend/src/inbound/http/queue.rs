//! Task queue API handlers.
//!
//! ```text
//! POST /api/queue-request
//! GET /api/queue-request/{id}
//! GET /api/queue-status/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Serialize;

use crate::domain::{Error, ITEM_NOT_FOUND, WorkItem, WorkItemId, WorkStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Body returned when an item is queued.
#[derive(Debug, Serialize)]
pub struct QueueAccepted {
    pub id: WorkItemId,
    pub status: WorkStatus,
}

impl From<&WorkItem> for QueueAccepted {
    fn from(item: &WorkItem) -> Self {
        Self {
            id: item.id().clone(),
            status: item.status(),
        }
    }
}

/// Queue a new work item; its result arrives later over the push channel.
#[post("/queue-request")]
pub async fn create_queue_request(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let item = state.queue.create_item().await?;
    Ok(HttpResponse::Ok().json(QueueAccepted::from(&item)))
}

async fn fetch_item(state: &HttpState, raw_id: &str) -> ApiResult<web::Json<WorkItem>> {
    // Malformed ids cannot name a stored item.
    let id = WorkItemId::parse(raw_id).map_err(|_| Error::not_found(ITEM_NOT_FOUND))?;
    let item = state.queue_query.find_item(&id).await?;
    Ok(web::Json(item))
}

/// Fetch a work item by id.
#[get("/queue-request/{id}")]
pub async fn get_queue_request(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<WorkItem>> {
    fetch_item(&state, &path.into_inner()).await
}

/// Status alias of [`get_queue_request`].
#[get("/queue-status/{id}")]
pub async fn get_queue_status(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<WorkItem>> {
    fetch_item(&state, &path.into_inner()).await
}

#[cfg(test)]
mod tests {
    //! Handler coverage against the real queue service and in-memory store.
    use std::sync::Arc;

    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use mockable::DefaultClock;
    use rstest::rstest;
    use serde_json::Value;
    use tokio::sync::Notify;

    use super::*;
    use crate::domain::TaskQueueService;
    use crate::domain::ports::{MockQueueCommand, WorkItemRepository};
    use crate::inbound::http::state::HttpStatePorts;
    use crate::outbound::memory::InMemoryWorkItemRepository;

    struct QueueFixture {
        repository: Arc<InMemoryWorkItemRepository>,
        ports: HttpStatePorts,
    }

    fn queue_fixture() -> QueueFixture {
        let repository = Arc::new(InMemoryWorkItemRepository::new());
        let service = Arc::new(TaskQueueService::new(
            Arc::clone(&repository) as Arc<dyn WorkItemRepository>,
            Arc::new(DefaultClock),
            Arc::new(Notify::new()),
        ));
        let ports = HttpStatePorts {
            queue: service.clone(),
            queue_query: service,
            ..HttpStatePorts::default()
        };
        QueueFixture { repository, ports }
    }

    async fn call(ports: HttpStatePorts, request: actix_test::TestRequest) -> ServiceResponse {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::from(ports)))
                .service(
                    web::scope("/api")
                        .service(create_queue_request)
                        .service(get_queue_request)
                        .service(get_queue_status),
                ),
        )
        .await;
        actix_test::call_service(&app, request.to_request()).await
    }

    #[rstest]
    #[actix_web::test]
    async fn create_returns_pending_id() {
        let fixture = queue_fixture();
        let response = call(
            fixture.ports.clone(),
            actix_test::TestRequest::post().uri("/api/queue-request"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["status"], "pending");

        let id = body["id"].as_str().expect("id string");
        let parsed = WorkItemId::parse(id).expect("uuid id");
        let stored = fixture
            .repository
            .find(&parsed)
            .await
            .expect("find")
            .expect("stored");
        assert!(stored.is_pending());
    }

    #[rstest]
    #[case("/api/queue-request")]
    #[case("/api/queue-status")]
    #[actix_web::test]
    async fn lookups_return_current_state(#[case] prefix: &str) {
        let fixture = queue_fixture();
        let created = fixture.ports.queue.create_item().await.expect("create");
        fixture
            .repository
            .complete(created.id(), "result text".to_owned())
            .await
            .expect("complete");

        let uri = format!("{prefix}/{}", created.id());
        let response = call(fixture.ports, actix_test::TestRequest::get().uri(&uri)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["id"], created.id().to_string());
        assert_eq!(body["status"], "completed");
        assert_eq!(body["result"], "result text");
        assert_eq!(body["timestamp"], created.timestamp());
    }

    #[rstest]
    #[actix_web::test]
    async fn pending_lookups_omit_result() {
        let fixture = queue_fixture();
        let created = fixture.ports.queue.create_item().await.expect("create");

        let uri = format!("/api/queue-request/{}", created.id());
        let response = call(fixture.ports, actix_test::TestRequest::get().uri(&uri)).await;
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["status"], "pending");
        assert!(body.get("result").is_none());
    }

    #[rstest]
    #[case("/api/queue-request/3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    #[case("/api/queue-status/3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    #[case("/api/queue-request/not-a-uuid")]
    #[actix_web::test]
    async fn unknown_ids_are_not_found(#[case] uri: &str) {
        let fixture = queue_fixture();
        let response = call(fixture.ports, actix_test::TestRequest::get().uri(uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({ "error": "Item not found", "code": "not_found" })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn create_failures_are_redacted() {
        let mut queue = MockQueueCommand::new();
        queue
            .expect_create_item()
            .returning(|| Err(Error::internal("lock poisoned")));
        let ports = HttpStatePorts {
            queue: Arc::new(queue),
            ..HttpStatePorts::default()
        };
        let response = call(ports, actix_test::TestRequest::post().uri("/api/queue-request")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }
}
