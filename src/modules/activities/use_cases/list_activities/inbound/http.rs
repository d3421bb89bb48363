use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::shared::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.queries.list_activities().await {
        Ok(activities) => Json(activities).into_response(),
        Err(e) => {
            error!(error = %e, "listing activities failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

#[cfg(test)]
mod list_activities_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::activities::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::activities::make_store;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_activities_keyed_by_name() {
        let response = app(AppState::new(Arc::new(make_store())))
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json["Chess Club"],
            serde_json::json!({
                "description": "Learn strategies and compete in chess tournaments",
                "schedule": "Fridays, 3:30 PM - 5:00 PM",
                "max_participants": 12,
                "participants": ["michael@mergington.edu", "daniel@mergington.edu"],
            })
        );
        assert!(json.get("Art Club").is_some());
    }

    #[tokio::test]
    async fn it_should_return_200_with_an_empty_object_when_no_activities_exist() {
        let response = app(AppState::new(Arc::new(InMemoryRosterStore::new())))
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_roster_store_is_offline() {
        let mut store = make_store();
        store.toggle_offline();
        let response = app(AppState::new(Arc::new(store)))
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
