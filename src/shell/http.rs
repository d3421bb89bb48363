use axum::{
    Extension, Router,
    response::Redirect,
    routing::{get, post},
};
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub const INDEX_PATH: &str = "/static/index.html";

pub fn router(state: AppState, static_dir: &Path) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(sign_up_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use crate::tests::fixtures::activities::make_store;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
        router(AppState::new(Arc::new(make_store())), &static_dir)
    }

    #[tokio::test]
    async fn it_should_redirect_the_root_to_the_front_end() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], INDEX_PATH);
    }

    #[tokio::test]
    async fn it_should_serve_the_static_front_end() {
        let response = app()
            .oneshot(Request::get(INDEX_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("activities-list"));
    }

    #[tokio::test]
    async fn it_should_return_404_for_a_missing_static_file() {
        let response = app()
            .oneshot(
                Request::get("/static/missing.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_serve_graphql_over_http() {
        let body = r#"{"query":"{ activities { name } }"}"#;
        let response = app()
            .oneshot(
                Request::post(GRAPHQL_PATH)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["data"]["activities"][0]["name"], "Art Club");
    }
}
