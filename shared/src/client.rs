//! Auth DTOs shared between roster-server and roster-client

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_wire_name() {
        let json = serde_json::to_value(LoginResponse {
            access_token: "t".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "accessToken": "t" }));
    }

    #[test]
    fn test_login_request_rejects_unknown_fields() {
        let parsed = serde_json::from_str::<LoginRequest>(
            r#"{"email":"a@b.com","password":"x","remember":true}"#,
        );
        assert!(parsed.is_err());
    }
}
