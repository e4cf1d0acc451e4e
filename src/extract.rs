//! Request extractors that validate before any handler logic runs.
//!
//! Every route binds its inputs through these extractors so that a request
//! failing validation short-circuits with a 400 response and never reaches
//! the handler. Handlers then receive already-decoded, already-validated
//! values.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that runs the schema's validation rules after
/// deserializing. Malformed JSON, missing required fields, and rule
/// violations all reject with `AppError::Validation` (HTTP 400).
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(errors.to_string()))?;

        Ok(Self(value))
    }
}

/// Path extractor for the `{id}` parameter, constrained to the identifier
/// format. Rejects with `AppError::Validation` (HTTP 400) when the parameter
/// does not parse as a UUID.
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        let id = Uuid::parse_str(&raw).map_err(|_| {
            AppError::Validation("Invalid UUID format for ID parameter.".to_string())
        })?;

        Ok(Self(id))
    }
}
