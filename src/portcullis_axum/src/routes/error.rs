//! Failure page for fatal store errors.

use axum::response::{IntoResponse, Response};
use portcullis_adapters::handlers::HandlerError;
use portcullis_core::AuthResponseHelpers;
use thiserror::Error;

use crate::adapters::response_builder;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct RouteError(#[from] pub HandlerError);

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");
        response_builder().internal_error()
    }
}
