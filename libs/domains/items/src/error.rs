use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

/// Message the HTTP layer returns for any missing item.
pub const ITEM_NOT_FOUND_MESSAGE: &str = "Item not found";

#[derive(Debug, Error)]
pub enum ItemError {
    /// No item matches the key. The key is kept as text because it may
    /// come straight from a non-numeric path segment.
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    pub fn not_found(id: impl ToString) -> Self {
        ItemError::NotFound(id.to_string())
    }
}

impl From<ValidationErrors> for ItemError {
    fn from(errors: ValidationErrors) -> Self {
        ItemError::Validation(errors.to_string())
    }
}

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => AppError::NotFound(ITEM_NOT_FOUND_MESSAGE.to_string()),
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_uses_fixed_message() {
        let app_error = AppError::from(ItemError::not_found(42));
        assert!(matches!(app_error, AppError::NotFound(ref msg) if msg == ITEM_NOT_FOUND_MESSAGE));
        assert_eq!(app_error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let app_error = AppError::from(ItemError::Validation("name must not be empty".into()));
        assert!(matches!(app_error, AppError::BadRequest(ref msg) if msg == "name must not be empty"));
        assert_eq!(app_error.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = ItemError::Internal("item id space exhausted".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
