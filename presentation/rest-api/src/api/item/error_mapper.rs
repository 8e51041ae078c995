use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.name_empty",
            ),
            ItemError::InvalidPurchaseDate => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.invalid_purchase_date",
            ),
            ItemError::InvalidShelfLife => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "item.invalid_shelf_life",
            ),
            ItemError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "item.not_found"),
            ItemError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
