//! Request bodies for the authentication endpoints.
//!
//! None of these derive `Debug`: they carry plaintext passwords.

use serde::Serialize;

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub password: String,
    pub password_confirm: String,
}
