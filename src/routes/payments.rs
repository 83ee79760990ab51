use axum::{routing::post, Router};

use crate::handlers::payment_handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Caller-facing initiation
        .route("/initiate-payment", post(payment_handlers::initiate_payment))
        // Server-to-server status delivery from the gateway
        .route("/payment-callback", post(payment_handlers::payment_callback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let config = AppConfig {
            merchant_id: "MERCHANTUAT".to_string(),
            salt_key: "salt-key".to_string(),
            salt_index: "1".to_string(),
            phonepe_base_url: "https://api-preprod.phonepe.com/apis/pg-sandbox".to_string(),
            app_base_url: "https://pay.example.com".to_string(),
            database_url: "mongodb://localhost:27017".to_string(),
            port: 5000,
            host: "0.0.0.0".to_string(),
        };
        let state = AppState::new(client.database("payments_test"), config);
        routes().with_state(state)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn empty_initiation_body_is_rejected_with_400() {
        let app = test_app().await;
        let response = app
            .oneshot(post_json("/initiate-payment", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_callback_body_is_rejected_with_400() {
        let app = test_app().await;
        let response = app
            .oneshot(post_json("/payment-callback", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
