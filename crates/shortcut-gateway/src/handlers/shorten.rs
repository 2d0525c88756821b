use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use tracing::info;

use crate::state::AppState;

/// `GET /shorten/{*target}`: responds with the path of the new short url.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> String {
    shorten(&state, target)
}

/// `GET /shorten/` maps a fresh code to the empty target.
pub async fn shorten_empty_handler(State(state): State<AppState>) -> String {
    shorten(&state, String::new())
}

/// `GET /shorten` is sent on to `/shorten/` without counting a call.
pub async fn shorten_redirect_handler() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/shorten/")])
}

fn shorten(state: &AppState, target: String) -> String {
    let store = state.store();
    store.record_shorten_call();

    info!(target = %target, "shortening url");
    store.create_short_url(target).to_path()
}
