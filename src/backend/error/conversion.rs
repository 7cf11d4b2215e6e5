/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`. Every error becomes a JSON body:
 *
 * ```json
 * { "message": "Expense not found or not authorized", "status": 404 }
 * ```
 *
 * Validation errors also carry the offending `field`.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        let mut body = serde_json::json!({
            "message": self.message(),
            "status": status.as_u16(),
        });
        if let Some(field) = self.field() {
            body["field"] = serde_json::Value::from(field);
        }

        (status, Json(body)).into_response()
    }
}
