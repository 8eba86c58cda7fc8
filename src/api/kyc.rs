//! KYC Endpoints

use reqwest::Method;
use serde::Serialize;

use crate::models::KycApplication;

use super::ApiError;

#[derive(Serialize)]
struct ReviewBody<'a> {
    kyc_id: u32,
    status: &'a str,
    reason: &'a str,
}

pub async fn list_pending_kyc() -> Result<Vec<KycApplication>, ApiError> {
    super::get_json("/admin/kyc").await
}

/// Approve or reject an application. The reject path requires a reason;
/// the screen enforces non-emptiness before calling here.
pub async fn review_kyc(kyc_id: u32, status: &str, reason: &str) -> Result<(), ApiError> {
    super::send_unit(
        Method::PATCH,
        "/admin/kyc",
        Some(&ReviewBody { kyc_id, status, reason }),
    )
    .await
}
