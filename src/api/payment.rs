//! Payment Endpoints

use reqwest::Method;
use serde::Serialize;

use crate::models::Payment;

use super::ApiError;

#[derive(Serialize)]
struct StatusBody<'a> {
    id: u32,
    status: &'a str,
}

pub async fn list_payments() -> Result<Vec<Payment>, ApiError> {
    super::get_json("/admin/payment").await
}

pub async fn update_payment_status(id: u32, status: &str) -> Result<(), ApiError> {
    super::send_unit(Method::PATCH, "/admin/payment", Some(&StatusBody { id, status })).await
}
