use serde::{Deserialize, Serialize};

/// Payload for `POST /api/auth/signup`. The confirmation password is a
/// client-side check only and has no field here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub login_id: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    /// Non-2xx signup response. `msg` is the response body, shown verbatim.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "SIGNUP_REJECTED".to_string(),
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> SignupRequest {
        SignupRequest {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            login_id: "jdoe".into(),
            password: "hunter2".into(),
        }
    }

    #[test]
    fn serialize_signup_request_camel_case_fields() {
        let v = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(v["firstName"], json!("Jane"));
        assert_eq!(v["lastName"], json!("Doe"));
        assert_eq!(v["loginId"], json!("jdoe"));
        assert_eq!(v["password"], json!("hunter2"));
    }

    #[test]
    fn signup_request_carries_exactly_four_keys() {
        let v = serde_json::to_value(sample_request()).unwrap();
        let keys = v.as_object().unwrap();
        assert_eq!(keys.len(), 4);
        assert!(keys.get("confirmPassword").is_none());
    }

    #[test]
    fn api_error_constructors_set_codes() {
        let rejected = ApiError::rejected("이미 존재하는 ID 입니다.");
        assert_eq!(rejected.code, "SIGNUP_REJECTED");
        assert_eq!(rejected.error, "이미 존재하는 ID 입니다.");

        let request_failed = ApiError::request_failed("network error");
        assert_eq!(request_failed.code, "REQUEST_FAILED");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::rejected("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::request_failed("bad gateway").into();
        assert_eq!(raw, "bad gateway");
    }
}
