use gloo::net::http::Request;
use portal_shared::{LeaveApplicationRequest, LeaveApplicationResponse};
use thiserror::Error;

use super::config::PortalConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status; `message` is its body
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// API client for communicating with the staff portal backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &PortalConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Submit a leave application for the signed-in staff member
    pub async fn submit_leave_application(
        &self,
        request: &LeaveApplicationRequest,
    ) -> Result<LeaveApplicationResponse, ApiError> {
        let url = self.endpoint("/api/leave-applications");

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let message = response
                .text()
                .await
                .ok()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(ApiError::Status {
                status: response.status(),
                message,
            });
        }

        response
            .json::<LeaveApplicationResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_endpoint_joins_paths() {
        let client = ApiClient::with_base_url("https://portal.example.org/".to_string());
        assert_eq!(
            client.endpoint("/api/leave-applications"),
            "https://portal.example.org/api/leave-applications"
        );
        assert_eq!(client.endpoint("api/logs"), "https://portal.example.org/api/logs");
    }

    #[wasm_bindgen_test]
    fn test_client_uses_config_base_url() {
        let config = PortalConfig::from_values(Some("http://10.0.0.5:8080"), None, None);
        let client = ApiClient::new(&config);
        assert_eq!(client.endpoint("api/logs"), "http://10.0.0.5:8080/api/logs");
    }

    #[wasm_bindgen_test]
    fn test_status_error_message() {
        let error = ApiError::Status {
            status: 409,
            message: "Overlapping leave application".to_string(),
        };
        assert_eq!(error.to_string(), "Overlapping leave application (HTTP 409)");
    }
}
