use std::borrow::Cow;
use std::collections::HashMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::Serialize;
use validator::ValidationErrors;

use crate::utility::tracing_targets::TRACING_TARGET_ERROR_RESPONSE;

/// Field-level detail of a failed request validation.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ValidationErrorDetail {
    /// Field name that failed validation
    pub field: String,
    /// Error code for the validation failure
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional parameters related to the validation error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, serde_json::Value>>,
}

/// Body of every HTTP error response.
///
/// Only `name`, `message`, `resource`, `suggestion` and `validation` reach
/// the client. The status code and internal context stay server-side.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse<'a> {
    /// The error name/type identifier
    pub name: Cow<'a, str>,
    /// User-friendly error message safe for client display
    pub message: Cow<'a, str>,
    /// The resource that the error relates to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Cow<'a, str>>,
    /// Helpful suggestion for resolving the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Cow<'a, str>>,
    /// Validation error details for field-specific errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Vec<ValidationErrorDetail>>,

    /// Internal context for debugging, never sent to the client
    #[serde(skip)]
    pub context: Option<Cow<'a, str>>,
    /// HTTP status code
    #[serde(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "Invalid request data.",
        StatusCode::BAD_REQUEST,
    );
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "Internal server error.",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const NOT_FOUND: Self =
        Self::new("not_found", "Resource not found.", StatusCode::NOT_FOUND);
    pub const VALIDATION_ERROR: Self = Self::new(
        "validation_error",
        "Validation failed.",
        StatusCode::BAD_REQUEST,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(name: &'a str, message: &'a str, status: StatusCode) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
            resource: None,
            suggestion: None,
            validation: None,
            context: None,
            status,
        }
    }

    /// Sets the resource, merging with an existing one as `existing/new`.
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        let new_resource = resource.into();
        self.resource = Some(match self.resource {
            Some(existing) => Cow::Owned(format!("{}/{}", existing, new_resource)),
            None => new_resource,
        });
        self
    }

    /// Appends a sentence to the message.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        let new_message = message.into();
        let base = self.message.trim_end_matches('.');
        self.message = Cow::Owned(format!("{}. {}", base, new_message));
        self
    }

    /// Attaches internal context, merging with existing context.
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        let new_context = context.into();
        self.context = Some(match self.context {
            Some(existing) => Cow::Owned(format!("{}; {}", existing, new_context)),
            None => new_context,
        });
        self
    }

    /// Attaches a suggestion, merging with an existing one.
    pub fn with_suggestion(mut self, suggestion: impl Into<Cow<'a, str>>) -> Self {
        let new_suggestion = suggestion.into();
        self.suggestion = Some(match self.suggestion {
            Some(existing) => Cow::Owned(format!("{}; {}", existing, new_suggestion)),
            None => new_suggestion,
        });
        self
    }

    /// Adds validation errors to the error response.
    pub fn with_validation_errors(mut self, errors: Vec<ValidationErrorDetail>) -> Self {
        self.validation = Some(errors);
        self
    }

    /// Creates an error response from validator [`ValidationErrors`].
    pub fn from_validation_errors(validation_errors: ValidationErrors) -> Self {
        let mut error_details = Vec::new();

        for (field, field_errors) in validation_errors.field_errors() {
            for error in field_errors {
                let params: HashMap<String, serde_json::Value> = error
                    .params
                    .iter()
                    // The rejected value may be a credential.
                    .filter(|(key, _)| *key != "value")
                    .map(|(key, value)| (key.to_string(), value.clone()))
                    .collect();

                error_details.push(ValidationErrorDetail {
                    field: field.to_string(),
                    code: error.code.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Validation failed for field '{}'", field)),
                    params: (!params.is_empty()).then_some(params),
                });
            }
        }

        error_details.sort_by(|a, b| a.field.cmp(&b.field));
        Self::VALIDATION_ERROR.with_validation_errors(error_details)
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl From<ValidationErrors> for ErrorResponse<'_> {
    fn from(errors: ValidationErrors) -> Self {
        Self::from_validation_errors(errors)
    }
}

impl IntoResponse for ErrorResponse<'_> {
    fn into_response(self) -> Response {
        tracing::warn!(
            target: TRACING_TARGET_ERROR_RESPONSE,
            status = %self.status,
            name = %self.name,
            message = %self.message,
            resource = ?self.resource,
            context = ?self.context,
            "HTTP error response"
        );
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use validator::{ValidationError, ValidationErrors};

    use super::*;

    #[test]
    fn error_response_merging_resource() {
        let response = ErrorResponse::NOT_FOUND
            .with_resource("org")
            .with_resource("data_source");

        assert_eq!(response.resource.as_deref(), Some("org/data_source"));
    }

    #[test]
    fn error_response_merging_message() {
        let response = ErrorResponse::BAD_REQUEST
            .with_message("Invalid format")
            .with_message("Missing required field");

        assert_eq!(
            &response.message,
            "Invalid request data. Invalid format. Missing required field"
        );
    }

    #[test]
    fn error_response_merging_context() {
        let response = ErrorResponse::INTERNAL_SERVER_ERROR
            .with_context("fixture unreadable")
            .with_context("retry skipped");

        assert_eq!(
            response.context.as_deref(),
            Some("fixture unreadable; retry skipped")
        );
    }

    #[test]
    fn error_response_serialization() {
        let response = ErrorResponse::NOT_FOUND
            .with_resource("data_source")
            .with_message("Data source not found")
            .with_context("org 1, id 99")
            .with_suggestion("List the organization's data sources");

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["name"], "not_found");
        assert_eq!(json["resource"], "data_source");
        assert!(json.get("suggestion").is_some());

        assert!(json.get("context").is_none());
        assert!(json.get("status").is_none());
        assert!(json.get("validation").is_none());
    }

    #[test]
    fn error_response_from_validation_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("user", ValidationError::new("length"));

        let response: ErrorResponse = errors.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.name, "validation_error");

        let details = response.validation.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "user");
        assert_eq!(details[0].code, "length");
        assert_eq!(details[0].message, "Validation failed for field 'user'");
    }

    #[test]
    fn error_response_into_response_uses_status() {
        let response = ErrorResponse::NOT_FOUND.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
