use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::alert::errors::AlertError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AlertError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            AlertError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    name: "InternalError".to_string(),
                    message: "repository.persistence".to_string(),
                }),
            ),
        }
    }
}
