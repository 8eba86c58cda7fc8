//! Frontend Models
//!
//! Data structures mirroring backend resources. The client never owns
//! persistence; these are the wire shapes of the REST admin API.

use serde::{Deserialize, Serialize};

/// Platform user as returned by the admin user list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// New-user registration payload (POST /auth/register)
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

/// Editable user fields (PATCH /admin/user/)
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
}

/// Savings scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub id: u32,
    pub name: String,
    pub months: u32,
    pub amount: f64,
    pub monthly_pay: f64,
    pub bonus: f64,
}

/// In-progress scheme form state. `amount == months * monthly_pay` is
/// enforced at submit time (see `forms`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemeDraft {
    pub name: String,
    pub months: u32,
    pub amount: f64,
    pub monthly_pay: f64,
    pub bonus: f64,
}

/// Payment row from the admin payment list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub amount: f64,
    pub payment_type: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Payment {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Pending KYC application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KycApplication {
    pub kyc_id: u32,
    pub user_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub document_type: String,
    pub document_number: String,
    #[serde(default)]
    pub document_url: Option<String>,
    pub status: String,
}

impl KycApplication {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Store product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub category_id: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Single user with nested collections (GET /admin/user/:id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub is_active: bool,
    #[serde(default)]
    pub schemes: Vec<UserScheme>,
    #[serde(default)]
    pub aims: Vec<UserAim>,
    #[serde(default)]
    pub wallet: Option<Wallet>,
}

impl UserDetail {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A scheme the user is enrolled in, with its payment history.
/// Currency fields arrive as strings and may be absent on legacy rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserScheme {
    pub id: u32,
    pub name: String,
    pub months: u32,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub monthly_pay: Option<String>,
    #[serde(default)]
    pub payments: Vec<LedgerEntry>,
}

/// A savings aim with its payment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAim {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub target_amount: Option<String>,
    #[serde(default)]
    pub payments: Vec<LedgerEntry>,
}

/// User wallet with its own ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: u32,
    #[serde(default)]
    pub balance: Option<String>,
    #[serde(default)]
    pub payments: Vec<LedgerEntry>,
}

/// One row of a payment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: u32,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// AED spot rate (GET /admin/aed-rate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AedRate {
    pub rate: f64,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One currency configuration entry (GET /admin/config)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

/// Static report row rendered on the reports screen (no API behind it)
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub period: String,
    pub new_users: u32,
    pub active_schemes: u32,
    pub total_collected: f64,
    pub payouts: f64,
}
