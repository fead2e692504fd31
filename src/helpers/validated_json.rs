use axum::async_trait;
use axum::body::HttpBody;
use axum::extract::FromRequest;
use axum::http::Request;
use axum::{BoxError, Json};
use serde_json::Value;
use tracing::warn;
use crate::errors::ApiError;
use crate::models::validation::Validate;

/// JSON body extractor that checks the document against `T`'s schema before
/// the handler runs, rejecting with every violation found.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for ValidatedJson<T>
where
    T: Validate,
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                warn!("Rejected request body: {}", rejection.body_text());
                ApiError::MalformedBody {
                    status: rejection.status(),
                    message: rejection.body_text(),
                }
            })?;

        T::validate(value)
            .map(ValidatedJson)
            .map_err(|violations| {
                warn!("Request body failed validation with {} violation(s)", violations.len());
                ApiError::Validation(violations)
            })
    }
}
