//! Validated JSON extractor - Combines deserialization with validation.

use std::collections::BTreeMap;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Malformed bodies are rejected with 400; bodies that parse but break a
/// `validator` rule are rejected with 422 and per-field messages.
///
/// # Example
///
/// ```rust,ignore
/// use user_directory::api::extractors::ValidatedJson;
/// use user_directory::domain::CreateUser;
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::InvalidFields(field_messages(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Collect validation errors as `field -> [messages]`
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CreateUser;

    #[test]
    fn test_field_messages_keyed_by_field() {
        let body = CreateUser {
            first_name: String::new(),
            last_name: "x".repeat(101),
        };
        let errors = body.validate().unwrap_err();
        let messages = field_messages(&errors);

        assert_eq!(
            messages["first_name"],
            vec!["First name must be 1-100 characters".to_string()]
        );
        assert!(messages.contains_key("last_name"));
    }
}
