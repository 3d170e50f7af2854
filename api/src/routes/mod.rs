use axum::extract::FromRequest;

use crate::error::AppError;

pub mod favorites;
pub mod foods;

/// `Json` whose rejections are reported through [`AppError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
