use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Greeting used by clients to confirm the API is reachable.
pub async fn root_handler() -> Json<Value> {
    Json(json!({"message": "Welcome to AI Toolbox API"}))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "toolbox-api"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_returns_welcome_message() {
        let Json(body) = root_handler().await;
        assert_eq!(body["message"], "Welcome to AI Toolbox API");
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let Json(body) = health_handler().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "toolbox-api");
    }
}
