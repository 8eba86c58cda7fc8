//! Currency Config Endpoints

use reqwest::Method;
use serde::Serialize;

use crate::models::{AedRate, ConfigEntry};

use super::ApiError;

#[derive(Serialize)]
struct RateBody {
    rate: f64,
}

pub async fn get_aed_rate() -> Result<AedRate, ApiError> {
    super::get_json("/admin/aed-rate").await
}

pub async fn set_aed_rate(rate: f64) -> Result<AedRate, ApiError> {
    super::send_json(Method::PATCH, "/admin/aed-rate", &RateBody { rate }).await
}

pub async fn list_config() -> Result<Vec<ConfigEntry>, ApiError> {
    super::get_json("/admin/config").await
}

pub async fn save_config(entry: &ConfigEntry) -> Result<ConfigEntry, ApiError> {
    super::send_json(Method::POST, "/admin/config", entry).await
}

pub async fn update_config(entry: &ConfigEntry) -> Result<ConfigEntry, ApiError> {
    super::send_json(Method::PATCH, "/admin/config", entry).await
}
