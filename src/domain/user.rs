//! User domain entity and related types.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::config::{MAX_USER_NAME_LENGTH, MIN_USER_NAME_LENGTH, PHONE_NUMBER_PATTERN};

/// Ten-digit phone number matcher
static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_NUMBER_PATTERN).expect("phone number pattern is valid"));

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier, generated on creation
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub user_id: String,
    #[schema(example = "alice")]
    pub user_name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "0123456789")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "221B Baker Street")]
    pub address: Option<String>,
}

impl User {
    /// Build a new user from a request, assigning a fresh random identifier.
    pub fn create(request: UserRequest) -> Self {
        Self {
            user_id: generate_user_id(),
            user_name: request.user_name,
            email: request.email,
            phone_number: request.phone_number,
            address: request.address,
        }
    }

    /// Overwrite every mutable field. The identifier is left untouched.
    pub fn apply(&mut self, request: UserRequest) {
        self.user_name = request.user_name;
        self.email = request.email;
        self.phone_number = request.phone_number;
        self.address = request.address;
    }
}

/// Generate a globally unique user identifier.
fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}

/// Payload for creating or updating a user.
///
/// Any `userId` sent by the client is ignored; identifiers are server-assigned.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// Display name (3 to 50 characters)
    #[validate(
        custom(function = "not_blank", message = "Username cannot be blank"),
        length(
            min = MIN_USER_NAME_LENGTH,
            max = MAX_USER_NAME_LENGTH,
            message = "Username must be between 3 and 50 characters"
        )
    )]
    #[schema(example = "alice", min_length = 3, max_length = 50)]
    pub user_name: String,
    /// Email address, unique across users
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Optional ten-digit phone number
    #[validate(regex(path = *PHONE_NUMBER_RE, message = "Phone number must be 10 digits"))]
    #[serde(default)]
    #[schema(example = "0123456789")]
    pub phone_number: Option<String>,
    /// Optional free-form address
    #[serde(default)]
    #[schema(example = "221B Baker Street")]
    pub address: Option<String>,
}

/// Rejects values that are empty once surrounding whitespace is removed.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> UserRequest {
        UserRequest {
            user_name: "alice".to_string(),
            email: "a@x.com".to_string(),
            phone_number: Some("0123456789".to_string()),
            address: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_user_name_length_bounds() {
        let mut req = request();
        req.user_name = "al".to_string();
        assert!(req.validate().is_err());

        req.user_name = "a".repeat(51);
        assert!(req.validate().is_err());

        req.user_name = "a".repeat(50);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_blank_user_name_rejected() {
        let mut req = request();
        req.user_name = "   ".to_string();

        let errors = req.validate().unwrap_err();
        let messages: Vec<String> = errors.field_errors()["user_name"]
            .iter()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        assert_eq!(messages, vec!["Username cannot be blank".to_string()]);
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut req = request();
        req.email = "not-an-email".to_string();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_phone_number_must_be_ten_digits() {
        let mut req = request();
        req.phone_number = Some("12345".to_string());
        assert!(req.validate().is_err());

        req.phone_number = Some("01234567ab".to_string());
        assert!(req.validate().is_err());

        req.phone_number = None;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_assigns_fresh_id() {
        let first = User::create(request());
        let second = User::create(request());
        assert!(!first.user_id.is_empty());
        assert_ne!(first.user_id, second.user_id);
    }

    #[test]
    fn test_apply_keeps_identifier() {
        let mut user = User::create(request());
        let id = user.user_id.clone();

        user.apply(UserRequest {
            user_name: "alice2".to_string(),
            email: "a2@x.com".to_string(),
            phone_number: None,
            address: Some("Elm Street".to_string()),
        });

        assert_eq!(user.user_id, id);
        assert_eq!(user.user_name, "alice2");
        assert_eq!(user.phone_number, None);
        assert_eq!(user.address.as_deref(), Some("Elm Street"));
    }

    #[test]
    fn test_json_uses_camel_case_and_ignores_client_id() {
        let req: UserRequest = serde_json::from_str(
            r#"{"userId":"client-chosen","userName":"alice","email":"a@x.com","phoneNumber":"0123456789"}"#,
        )
        .unwrap();
        let user = User::create(req);
        assert_ne!(user.user_id, "client-chosen");

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userName"], "alice");
        assert_eq!(json["phoneNumber"], "0123456789");
        assert!(json.get("address").is_none());
    }
}
