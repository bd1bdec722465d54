use super::{
    client::ApiClient,
    types::{ApiError, SignupRequest},
};

impl ApiClient {
    /// Registers a new account. A 2xx response body is ignored; a non-2xx
    /// body is plain text and becomes the user-facing message.
    pub async fn signup(&self, request: SignupRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let builder = self
            .http_client()
            .post(&format!("{}/api/auth/signup", base_url))
            .json(&request);
        let response = Self::with_credentials(builder)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let message = response
                .text()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to read error body: {}", e)))?;
            Err(ApiError::rejected(message))
        }
    }
}
