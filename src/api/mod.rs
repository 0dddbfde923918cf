// REST API with Axum
//
// | Method | Path          | Gate |
// |--------|---------------|------|
// | POST   | /conta        | no   |
// | GET    | /conta        | yes  |
// | PUT    | /conta        | yes  |
// | DELETE | /conta        | yes  |
// | GET    | /extrato      | yes  |
// | GET    | /extrato/date | yes  |
// | POST   | /deposito     | yes  |
// | POST   | /saque        | yes  |
// | GET    | /health       | no   |

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;

use crate::directory::AccountDirectory;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use extract::Cpf;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub directory: AccountDirectory,
}

impl AppState {
    pub fn new(directory: AccountDirectory) -> Self {
        AppState { directory }
    }
}

/// Build the full router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/conta",
            post(handlers::create_account)
                .get(handlers::get_account)
                .put(handlers::update_account)
                .delete(handlers::delete_account),
        )
        .route("/extrato", get(handlers::get_statement))
        .route("/extrato/date", get(handlers::get_statement_by_date))
        .route("/deposito", post(handlers::deposit))
        .route("/saque", post(handlers::withdraw))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
