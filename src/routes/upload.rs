use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, record::create_record, state::AppState};

#[derive(Deserialize)]
pub struct UploadRequest {
    data: String,
}

#[derive(Serialize)]
pub struct UploadResponse {
    message: String,
}

pub async fn handler(
    State(state): State<AppState>,
    payload: Result<Json<UploadRequest>, JsonRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let record = create_record(state.db.as_ref(), &body.data)
        .await
        .map_err(|err| match err {
            // Storage detail stays in the logs, never in the response body.
            ApiError::Internal(detail) => {
                tracing::error!("failed to store upload: {detail}");
                ApiError::Internal("An unexpected error occurred".to_string())
            }
            other => other,
        })?;

    tracing::info!(id = %record.id, lines = record.content.len(), "stored upload");

    Ok(Json(UploadResponse {
        message: "Data processed and stored successfully!".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use lambda_http::tower::ServiceExt;

    use crate::{db::memory::MemoryDb, state::AppState};

    fn test_app_state() -> (AppState, MemoryDb) {
        let db = MemoryDb::new();
        let state = AppState {
            db: Arc::new(db.clone()),
        };
        (state, db)
    }

    fn build_router(state: AppState) -> axum::Router {
        crate::routes::router(state)
    }

    #[tokio::test]
    async fn test_upload_returns_200() {
        let (state, _db) = test_app_state();
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/upload")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"data":"a\nb"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_missing_data_field_returns_400() {
        let (state, db) = test_app_state();
        let app = build_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/upload")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"other":"x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(db.list_records().unwrap().is_empty());
    }
}
