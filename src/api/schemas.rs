use serde::Serialize;
use utoipa::ToSchema;

/// Envelope around every successful payload.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope around every failure, including rejected admin tokens.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code, e.g. `NOT_AUTHENTICATED`, `VALIDATION_ERROR`, `NOT_FOUND`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    #[schema(example = "message must be at least 10 characters")]
    pub message: String,
}
