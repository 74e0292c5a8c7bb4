use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

pub const GENERIC_FAULT_MESSAGE: &str = "Oops! Something went wrong";

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error kind, e.g. `InvalidId` or `NotFound`
    pub name: String,
    /// Human-readable message
    pub message: String,
    /// Underlying store error, only present on wrapped internal errors
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
            error: None,
        }
    }
}

/// How an endpoint reports store faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultReporting {
    /// Generic `message`, store detail in `error`.
    Wrapped,
    /// Store detail as the `message` itself.
    Raw,
}

pub trait IntoErrorResponse {
    fn into_error_response(self, faults: FaultReporting) -> (StatusCode, Json<ErrorResponse>);
}
