//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::MAX_NAME_LENGTH;
use crate::errors::{AppError, AppResult};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(id: impl Into<String>, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check whether this user carries exactly the given name pair
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}

/// Partial update: `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    /// Resulting name pair once applied on top of `user`
    pub fn apply_to(&self, user: &User) -> (String, String) {
        (
            self.first_name
                .clone()
                .unwrap_or_else(|| user.first_name.clone()),
            self.last_name
                .clone()
                .unwrap_or_else(|| user.last_name.clone()),
        )
    }
}

/// Trim and check a single name field.
fn validate_name(value: &str, label: &str) -> AppResult<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{} cannot be empty", label)));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "{} cannot exceed {} characters",
            label, MAX_NAME_LENGTH
        )));
    }

    Ok(trimmed.to_string())
}

/// Trim and validate a name pair, returning the trimmed values.
///
/// Both names must be non-blank and at most [`MAX_NAME_LENGTH`] characters.
pub fn validate_names(first_name: &str, last_name: &str) -> AppResult<(String, String)> {
    let first = validate_name(first_name, "First name")?;
    let last = validate_name(last_name, "Last name")?;
    Ok((first, last))
}

/// Reject blank identifiers before they reach the store.
pub fn validate_id(id: &str) -> AppResult<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("User id cannot be empty"));
    }
    Ok(trimmed)
}

/// User creation request body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// User first name
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    #[schema(example = "Alice", min_length = 1, max_length = 100)]
    pub first_name: String,
    /// User last name
    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    #[schema(example = "Smith", min_length = 1, max_length = 100)]
    pub last_name: String,
}

/// User update request body; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    /// New first name
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    #[schema(example = "Alicia")]
    pub first_name: Option<String>,
    /// New last name
    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    #[schema(example = "Smythe")]
    pub last_name: Option<String>,
}

impl From<UpdateUser> for UserChanges {
    fn from(body: UpdateUser) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    /// User first name
    #[schema(example = "Alice")]
    pub first_name: String,
    /// User last name
    #[schema(example = "Smith")]
    pub last_name: String,
    /// First and last name joined by a space
    #[schema(example = "Alice Smith")]
    pub full_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let full_name = user.full_name();
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            full_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new("id-1", "Alice", "Smith")
    }

    #[test]
    fn test_full_name() {
        assert_eq!(alice().full_name(), "Alice Smith");
        assert!(alice().has_name("Alice", "Smith"));
        assert!(!alice().has_name("alice", "Smith"));
    }

    #[test]
    fn test_validate_names_trims() {
        let (first, last) = validate_names("  Alice ", "\tSmith\n").unwrap();
        assert_eq!(first, "Alice");
        assert_eq!(last, "Smith");
    }

    #[test]
    fn test_validate_names_rejects_blank() {
        let err = validate_names("   ", "Doe").unwrap_err();
        assert_eq!(err.to_string(), "First name cannot be empty");

        let err = validate_names("John", "").unwrap_err();
        assert_eq!(err.to_string(), "Last name cannot be empty");
    }

    #[test]
    fn test_validate_names_length_counts_chars() {
        let exact = "é".repeat(MAX_NAME_LENGTH);
        assert!(validate_names(&exact, "Doe").is_ok());

        let too_long = "a".repeat(MAX_NAME_LENGTH + 1);
        let err = validate_names("John", &too_long).unwrap_err();
        assert_eq!(err.to_string(), "Last name cannot exceed 100 characters");

        // Surrounding whitespace does not count against the limit
        let padded = format!("  {}  ", "b".repeat(MAX_NAME_LENGTH));
        assert!(validate_names(&padded, "Doe").is_ok());
    }

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id(" abc ").unwrap(), "abc");
        assert!(matches!(validate_id("  "), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_changes_apply_to() {
        let changes = UserChanges {
            first_name: Some("Alicia".to_string()),
            last_name: None,
        };
        assert!(!changes.is_empty());
        assert_eq!(
            changes.apply_to(&alice()),
            ("Alicia".to_string(), "Smith".to_string())
        );
        assert!(UserChanges::default().is_empty());
    }

    #[test]
    fn test_request_validation() {
        let body = CreateUser {
            first_name: String::new(),
            last_name: "Smith".to_string(),
        };
        let errors = body.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));

        let partial = UpdateUser {
            first_name: None,
            last_name: Some("Jones".to_string()),
        };
        assert!(partial.validate().is_ok());
    }

    #[test]
    fn test_response_includes_full_name() {
        let response = UserResponse::from(alice());
        assert_eq!(response.full_name, "Alice Smith");
        assert_eq!(response.id, "id-1");
    }
}
