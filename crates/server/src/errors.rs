use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use tracing::{error, warn};

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error returned by every handler; rendered as `{"message": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// Logged but never sent to the client.
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), detail: None }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: INTERNAL_MESSAGE.into(), detail: Some(detail.into()) }
    }
}

/// Attached to error responses so [`log_api_errors`] can report them with the request path.
#[derive(Clone, Debug)]
pub struct ErrorContext(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let logged = self.detail.unwrap_or_else(|| self.message.clone());
        let mut resp = (self.status, Json(ErrorBody::new(self.message))).into_response();
        resp.extensions_mut().insert(ErrorContext(logged));
        resp
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::new(StatusCode::NOT_FOUND, msg),
            ServiceError::Validation(_) | ServiceError::Model(models::errors::ModelError::Validation(_)) => {
                ApiError::new(StatusCode::BAD_REQUEST, e.to_string())
            }
            ServiceError::Db(_) | ServiceError::Model(_) => ApiError::internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

/// Middleware: log every error response with method and path.
/// 5xx at ERROR with the internal detail, 4xx at WARN.
pub async fn log_api_errors(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let resp = next.run(req).await;
    if let Some(ErrorContext(message)) = resp.extensions().get::<ErrorContext>() {
        let status = resp.status().as_u16();
        if resp.status().is_server_error() {
            error!(%method, %path, status, error = %message, "request failed");
        } else {
            warn!(%method, %path, status, error = %message, "request rejected");
        }
    }
    resp
}
