//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{Scope, guard, web};

pub mod cors;
pub mod error;
pub mod health;
pub mod queue;
pub mod state;
pub mod stream;
pub mod users;

pub use error::ApiResult;

/// All `/api` routes, including the CORS preflight catch-all.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use showcase_backend::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .service(users::list_users)
        .service(stream::stream_text)
        .service(queue::create_queue_request)
        .service(queue::get_queue_request)
        .service(queue::get_queue_status)
        .service(
            web::resource("/{tail:.*}")
                .guard(guard::Options())
                .to(cors::preflight),
        )
}
