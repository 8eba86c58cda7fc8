//! Category Endpoints

use reqwest::Method;
use serde::Serialize;

use crate::models::Category;

use super::ApiError;

#[derive(Serialize)]
struct NameBody<'a> {
    name: &'a str,
}

pub async fn list_categories() -> Result<Vec<Category>, ApiError> {
    super::get_json("/admin/category").await
}

pub async fn create_category(name: &str) -> Result<Category, ApiError> {
    super::send_json(Method::POST, "/admin/category", &NameBody { name }).await
}

pub async fn update_category(id: u32, name: &str) -> Result<Category, ApiError> {
    super::send_json(Method::PATCH, &format!("/admin/category/{}", id), &NameBody { name }).await
}

pub async fn delete_category(id: u32) -> Result<(), ApiError> {
    super::delete(&format!("/admin/category/{}", id)).await
}
