use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use mergington::data::ErrorDetail;
use mergington::errors::SignupError;

/// Turns a rejected signup or removal into a `{"detail": ...}` response.
#[derive(Debug)]
pub struct ApiError(pub SignupError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            SignupError::ActivityNotFound | SignupError::NotSignedUp => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp | SignupError::ActivityFull => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<SignupError> for ApiError {
    fn from(error: SignupError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorDetail::from(&self.0))).into_response()
    }
}
