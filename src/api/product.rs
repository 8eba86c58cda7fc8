//! Product Endpoints
//!
//! Product mutations go up as multipart forms so the image file can ride
//! along with the fields.

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::models::Product;

use super::ApiError;

/// Form fields for product create/update. `image` is the raw file
/// content read from the picker, if the admin chose one.
#[derive(Debug, Clone, Default)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub category_id: Option<u32>,
    pub description: String,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

fn to_form(payload: &ProductPayload) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("name", payload.name.clone())
        .text("price", payload.price.to_string())
        .text("description", payload.description.clone());
    if let Some(category_id) = payload.category_id {
        form = form.text("category_id", category_id.to_string());
    }
    if let Some(image) = &payload.image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.filename.clone())
            .mime_str(&image.mime)
            .map_err(|_| ApiError::Decode)?;
        form = form.part("image", part);
    }
    Ok(form)
}

pub async fn list_products() -> Result<Vec<Product>, ApiError> {
    super::get_json("/admin/products").await
}

pub async fn create_product(payload: &ProductPayload) -> Result<Product, ApiError> {
    let request = super::client()
        .post(super::url("/admin/product"))
        .multipart(to_form(payload)?);
    let response = super::execute(request).await?;
    response.json().await.map_err(|_| ApiError::Decode)
}

pub async fn update_product(id: u32, payload: &ProductPayload) -> Result<Product, ApiError> {
    let request = super::client()
        .request(Method::PATCH, super::url(&format!("/admin/product/{}", id)))
        .multipart(to_form(payload)?);
    let response = super::execute(request).await?;
    response.json().await.map_err(|_| ApiError::Decode)
}

pub async fn delete_product(id: u32) -> Result<(), ApiError> {
    super::delete(&format!("/admin/product/{}", id)).await
}
