//! Auth Endpoints
//!
//! Login, logout, and admin-side user registration.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::models::RegisterUser;

use super::ApiError;

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
}

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    super::send_json(Method::POST, "/auth/login", &LoginBody { email, password }).await
}

pub async fn logout(user_id: u32) -> Result<(), ApiError> {
    super::send_unit::<()>(Method::POST, &format!("/auth/logout/{}", user_id), None).await
}

pub async fn register(new_user: &RegisterUser) -> Result<(), ApiError> {
    super::send_unit(Method::POST, "/auth/register", Some(new_user)).await
}
