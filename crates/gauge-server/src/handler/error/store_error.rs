//! Store error to HTTP error conversion.

use gauge_store::StoreError;

use crate::handler::{Error, ErrorKind};
use crate::utility::tracing_targets::TRACING_TARGET_STORE_ERROR;

impl From<StoreError> for Error<'static> {
    fn from(error: StoreError) -> Self {
        tracing::error!(
            target: TRACING_TARGET_STORE_ERROR,
            error = %error,
            transient = error.is_transient(),
            "store operation failed"
        );

        ErrorKind::InternalServerError
            .with_message("Failed to load data sources")
            .with_context(error.to_string())
    }
}
