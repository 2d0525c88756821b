use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use shortcut_store::encoding::to_pretty_vec;

use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    /// `json` selects the structured form; anything else renders plain text.
    pub format: Option<String>,
}

pub async fn stats_handler(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Response> {
    let store = state.store();
    store.record_stats_visit();
    let stats = store.export_stats();

    if query.format.as_deref() == Some("json") {
        let body = to_pretty_vec(&stats.into_document())
            .map_err(|e| AppError::Render(e.to_string()))?;
        return Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response());
    }

    Ok(stats.to_string().into_response())
}
