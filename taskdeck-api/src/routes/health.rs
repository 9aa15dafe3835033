/// Health check endpoint
///
/// # Endpoint
///
/// ```text
/// GET /api/health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "message": "Server is running"
/// }
/// ```
///
/// The check is a pure liveness probe — it answers as long as the process
/// accepts requests. Database health is verified at startup before the
/// listener binds.

use axum::Json;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Human-readable detail
    pub message: String,
}

/// Health check handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_response() {
        let Json(response) = health_check().await;
        assert_eq!(response.status, "OK");
        assert_eq!(response.message, "Server is running");
    }
}
