//! Error-to-response mapping for [`AppError`].

use axum::http::StatusCode;
use axum::response::IntoResponse;
use catalog_api::error::AppError;
use catalog_core::error::CoreError;
use catalog_db::StoreError;
use http_body_util::BodyExt;

async fn render(error: AppError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_names_the_entity() {
    let (status, body) = render(AppError::Core(CoreError::NotFound {
        entity: "Product",
        id: "65a1b2c3d4e5f60718293a4b".into(),
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Product not found");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn invalid_id_is_bad_request() {
    let (status, body) = render(CoreError::InvalidId("xyz".into()).into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid ID");
    assert_eq!(body["code"], "INVALID_ID");
}

#[tokio::test]
async fn validation_message_is_passed_through() {
    let (status, body) =
        render(CoreError::Validation("Name and price are required".into()).into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name and price are required");
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn store_details_are_not_leaked() {
    let (status, body) = render(AppError::Store(StoreError::Unavailable(
        "connection refused to 10.0.0.7:27017".into(),
    )))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server error");
    assert_eq!(body["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn internal_errors_share_the_generic_message() {
    for error in [
        AppError::InternalError("boom".into()),
        AppError::Core(CoreError::Internal("corrupt record".into())),
    ] {
        let (status, body) = render(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server error");
    }
}

#[tokio::test]
async fn bad_request_keeps_its_message() {
    let (status, body) = render(AppError::BadRequest("Invalid request body".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
    assert_eq!(body["code"], "BAD_REQUEST");
}
