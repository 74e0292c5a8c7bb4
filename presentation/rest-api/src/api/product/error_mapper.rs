use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;
use business::domain::product::validation::ValidationError;

use crate::api::error::{
    ErrorResponse, FaultReporting, GENERIC_FAULT_MESSAGE, IntoErrorResponse,
};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self, faults: FaultReporting) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, body) = match self {
            ProductError::Validation(ref violation) => {
                let name = match violation {
                    ValidationError::InvalidName => "InvalidName",
                    ValidationError::InvalidPrice => "InvalidPrice",
                    ValidationError::InvalidCategory => "InvalidCategory",
                    ValidationError::InvalidStockStatus => "InvalidStockStatus",
                };
                (StatusCode::BAD_REQUEST, ErrorResponse::new(name, message))
            }
            ProductError::InvalidId => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("InvalidId", message),
            ),
            ProductError::DuplicateName => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("DuplicateName", message),
            ),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", message),
            ),
            ProductError::Repository(ref e) => {
                let body = match faults {
                    FaultReporting::Wrapped => ErrorResponse {
                        error: Some(e.detail()),
                        ..ErrorResponse::new("StoreFault", GENERIC_FAULT_MESSAGE)
                    },
                    FaultReporting::Raw => ErrorResponse::new("StoreFault", e.detail()),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request_with_message() {
        let (status, Json(body)) = ProductError::from(ValidationError::InvalidPrice)
            .into_error_response(FaultReporting::Wrapped);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.name, "InvalidPrice");
        assert_eq!(body.message, "Invalid price");
        assert!(body.error.is_none());
    }

    #[test]
    fn should_map_not_found_to_404() {
        let (status, Json(body)) =
            ProductError::NotFound.into_error_response(FaultReporting::Wrapped);

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Product not found");
    }

    #[test]
    fn should_map_duplicate_name_to_bad_request() {
        let (status, Json(body)) =
            ProductError::DuplicateName.into_error_response(FaultReporting::Wrapped);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Product name already exists");
    }

    #[test]
    fn should_wrap_store_fault_behind_generic_message() {
        let error = ProductError::Repository(RepositoryError::database("pool closed"));

        let (status, Json(body)) = error.into_error_response(FaultReporting::Wrapped);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, GENERIC_FAULT_MESSAGE);
        assert_eq!(body.error.as_deref(), Some("pool closed"));
    }

    #[test]
    fn should_surface_raw_store_message() {
        let error = ProductError::Repository(RepositoryError::database("pool closed"));

        let (status, Json(body)) = error.into_error_response(FaultReporting::Raw);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "pool closed");
        assert!(body.error.is_none());
    }
}
