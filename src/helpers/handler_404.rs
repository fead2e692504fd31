use axum::http::Uri;
use crate::errors::ApiError;

pub async fn page_not_found_handler(uri: Uri) -> ApiError {
    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}
