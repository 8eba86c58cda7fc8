//! User Endpoints

use reqwest::Method;
use serde::Serialize;

use crate::models::{User, UserDetail, UserUpdate};

use super::ApiError;

#[derive(Serialize)]
struct BlockBody {
    id: u32,
    status: &'static str,
}

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    super::get_json("/admin/user").await
}

pub async fn user_detail(id: u32) -> Result<UserDetail, ApiError> {
    super::get_json(&format!("/admin/user/{}", id)).await
}

pub async fn update_user(update: &UserUpdate) -> Result<User, ApiError> {
    super::send_json(Method::PATCH, "/admin/user/", update).await
}

/// Block (`active = false`) or unblock a user
pub async fn set_user_blocked(id: u32, blocked: bool) -> Result<(), ApiError> {
    let body = BlockBody {
        id,
        status: if blocked { "inactive" } else { "active" },
    };
    super::send_unit(Method::PATCH, "/admin/user-block/", Some(&body)).await
}

pub async fn delete_user(id: u32) -> Result<(), ApiError> {
    super::delete(&format!("/admin/user/{}", id)).await
}
