use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

pub const HOME_BANNER: &str = "This is the home of my website!\n\n";

/// Serves `/` and resolves every other unrouted path as a short code.
pub async fn home_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let store = state.store();
    store.record_home_visit();

    let path = uri.path();
    if path == "/" {
        return HOME_BANNER.into_response();
    }

    match store.lookup_path(path) {
        Some(target) => format!("{}Redirect to:\n{}", HOME_BANNER, target).into_response(),
        None => (StatusCode::NOT_FOUND, HOME_BANNER).into_response(),
    }
}
