//! Mapping from domain errors to GraphQL field errors.

use juniper::{FieldError, IntoFieldError, Object, ScalarValue, Value};
use tracing::error;

use crate::domain::{DomainError, ErrorCode};

/// Generic message returned for faults the client cannot act on.
const INTERNAL_MESSAGE: &str = "Internal server error";

impl<S: ScalarValue> IntoFieldError<S> for DomainError {
    fn into_field_error(self) -> FieldError<S> {
        let code = self.code();
        let message = if code == ErrorCode::InternalError {
            error!(detail = %self.message(), "internal fault reached the API boundary");
            INTERNAL_MESSAGE.to_owned()
        } else {
            self.message().to_owned()
        };

        let mut extensions = Object::with_capacity(1);
        extensions.add_field("code", Value::scalar(code.as_str().to_owned()));
        FieldError::new(message, Value::Object(extensions))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use juniper::DefaultScalarValue;

    fn field_error(error: DomainError) -> FieldError<DefaultScalarValue> {
        error.into_field_error()
    }

    #[test]
    fn validation_errors_keep_their_message_and_code() {
        let err = field_error(DomainError::invalid_request("Missing required fields"));
        assert_eq!(err.message(), "Missing required fields");

        let extensions = err.extensions();
        let code = extensions
            .as_object_value()
            .and_then(|object| object.get_field_value("code"))
            .and_then(Value::as_string_value);
        assert_eq!(code, Some("invalid_request"));
    }

    #[test]
    fn internal_faults_are_masked_with_a_generic_message() {
        let err = field_error(DomainError::internal("connection reset by peer"));
        assert_eq!(err.message(), "Internal server error");

        let extensions = err.extensions();
        let code = extensions
            .as_object_value()
            .and_then(|object| object.get_field_value("code"))
            .and_then(Value::as_string_value);
        assert_eq!(code, Some("internal_error"));
    }
}
