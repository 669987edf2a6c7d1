pub mod health;
pub mod patients;

use axum::routing::get;
use axum::Router;

use crate::handlers::info;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /                     welcome message (GET)
/// /about                service description (GET)
///
/// /view                 all patients (GET)
/// /view/{id}            one patient (GET)
/// /createp              create patient (POST)
/// /edit/{id}            partial update (PUT)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(info::welcome))
        .route("/about", get(info::about))
        .merge(patients::router())
}
