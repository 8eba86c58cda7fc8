//! Scheme Endpoints

use reqwest::Method;

use crate::models::{Scheme, SchemeDraft};

use super::ApiError;

pub async fn list_schemes() -> Result<Vec<Scheme>, ApiError> {
    super::get_json("/admin/scheme").await
}

pub async fn create_scheme(draft: &SchemeDraft) -> Result<Scheme, ApiError> {
    super::send_json(Method::POST, "/admin/scheme", draft).await
}

pub async fn update_scheme(id: u32, draft: &SchemeDraft) -> Result<Scheme, ApiError> {
    super::send_json(Method::PATCH, &format!("/admin/scheme/{}", id), draft).await
}

pub async fn delete_scheme(id: u32) -> Result<(), ApiError> {
    super::delete(&format!("/admin/scheme/{}", id)).await
}
