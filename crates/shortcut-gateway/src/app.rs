use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    home_handler, shorten_empty_handler, shorten_handler, shorten_redirect_handler, stats_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the router.
    ///
    /// Every path that is not `/shorten/...` or `/stats` reaches the home
    /// handler, which treats non-root paths as short codes.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/shorten", get(shorten_redirect_handler))
            .route("/shorten/", get(shorten_empty_handler))
            .route("/shorten/{*target}", get(shorten_handler))
            .route("/stats", get(stats_handler))
            .fallback(home_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::HOME_BANNER;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use shortcut_store::UrlStore;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup() -> (Router, Arc<UrlStore>) {
        let store = Arc::new(UrlStore::default());
        (App::router(AppState::new(Arc::clone(&store))), store)
    }

    async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn shorten_returns_code_path() {
        let (router, store) = setup();

        let (status, body) = get(&router, "/shorten/www.google.it").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.len(), 9);
        assert!(body.starts_with('/'));
        assert_eq!(store.get(&body[1..]).as_deref(), Some("www.google.it"));

        let stats = store.export_stats();
        assert_eq!(stats.shorten_call, 1);
        assert_eq!(stats.urls_generated, 1);
    }

    #[tokio::test]
    async fn shorten_keeps_nested_path_segments() {
        let (router, store) = setup();

        let (_, body) = get(&router, "/shorten/example.com/a/b").await;

        assert_eq!(store.get(&body[1..]).as_deref(), Some("example.com/a/b"));
    }

    #[tokio::test]
    async fn shorten_with_empty_target() {
        let (router, store) = setup();

        let (status, body) = get(&router, "/shorten/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.get(&body[1..]).as_deref(), Some(""));
        assert_eq!(store.export_stats().shorten_call, 1);
    }

    #[tokio::test]
    async fn root_counts_home_visit_only() {
        let (router, store) = setup();

        let (status, body) = get(&router, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, HOME_BANNER);

        let stats = store.export_stats();
        assert_eq!(stats.home_visit, 1);
        assert_eq!(stats.success_redirect, 0);
        assert_eq!(stats.failed_redirect, 0);
    }

    #[tokio::test]
    async fn known_code_is_resolved() {
        let (router, store) = setup();
        let code = store.create_short_url("golang.org");

        let (status, body) = get(&router, &code.to_path()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, format!("{}Redirect to:\ngolang.org", HOME_BANNER));
        assert_eq!(store.export_stats().success_redirect, 1);
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let (router, store) = setup();

        let (status, body) = get(&router, "/not-existing-url").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, HOME_BANNER);

        let stats = store.export_stats();
        assert_eq!(stats.home_visit, 1);
        assert_eq!(stats.failed_redirect, 1);
    }

    #[tokio::test]
    async fn shorten_without_slash_redirects() {
        let (router, store) = setup();

        let response = router
            .clone()
            .oneshot(Request::get("/shorten").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/shorten/");

        let stats = store.export_stats();
        assert_eq!(stats.shorten_call, 0);
        assert_eq!(stats.home_visit, 0);
        assert_eq!(stats.failed_redirect, 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn slash_prefixed_keys_resolve() {
        let (router, store) = setup();
        store
            .load_bulk(r#"{"/aZ3kP9qx":"golang.org"}"#.as_bytes())
            .unwrap();

        let (status, body) = get(&router, "/aZ3kP9qx").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, format!("{}Redirect to:\ngolang.org", HOME_BANNER));
        assert_eq!(store.export_stats().success_redirect, 1);
    }

    #[tokio::test]
    async fn stats_plain_text() {
        let (router, _) = setup();

        let (status, body) = get(&router, "/stats").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            "Home called: 0\nShorten called: 0\nStats called: 1\nGenerated urls: 0\nSuccess redirect: 0\nFailed redirect: 0\n"
        );
    }

    #[tokio::test]
    async fn stats_json() {
        let (router, store) = setup();
        store
            .load_bulk(r#"{"urlnum1":"google.it","urlnum2":"golang.org"}"#.as_bytes())
            .unwrap();
        get(&router, "/urlnum1").await;
        get(&router, "/shorten/test.com").await;

        let response = router
            .clone()
            .oneshot(Request::get("/stats?format=json").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let document: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            document,
            serde_json::json!({
                "Stats": {
                    "HomeVisit": 1,
                    "ShortenCall": 1,
                    "StatsVisit": 1,
                    "UrlsGenerated": 3,
                    "SuccessRedirect": 1,
                    "FailedRedirect": 0
                }
            })
        );
    }

    #[tokio::test]
    async fn stats_unknown_format_falls_back_to_text() {
        let (router, _) = setup();

        let (_, body) = get(&router, "/stats?format=xml").await;

        assert!(body.starts_with("Home called: 0\n"));
    }
}
