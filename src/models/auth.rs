use serde::{Deserialize, Serialize};

/// `POST /auth/login` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email or username.
    pub identifier: String,
    pub password: String,
    pub ip_address: String,
    pub device: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Bearer token; decoded and persisted by the session store on success.
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user_code: i64,
    #[serde(default)]
    pub company_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
    pub company_name: String,
    pub company_address: String,
    pub warehouse_id: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub company_id: i64,
    #[serde(default)]
    pub user_code: i64,
}

/// Projection of the last successfully decoded session token.
///
/// Never constructed by hand outside the token codec; the persisted
/// `currentUser` snapshot is the serialized form of this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    /// Primary role: first resolved role claim, or `"user"` when none.
    pub role: String,
    pub company_id: String,
    pub user_code: String,
}
