pub mod job;

use serde::Serialize;

/// Response envelope shared by the public endpoints.
/// `success: false` carries a content rejection, not a server fault.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: Option<String>, data: T) -> Self {
        Self {
            success: true,
            message,
            data: Some(data),
        }
    }

    pub fn rejected(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}
