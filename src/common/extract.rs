//! Request extractors that report decode failures through [`AppError`]
//! instead of axum's plain-text rejections.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use super::error::AppError;

/// JSON body extractor. Unknown or mistyped fields become a 400 error
/// envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor with the same error envelope as [`AppJson`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
