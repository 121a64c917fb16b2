//! Response envelopes wrapped around every backend payload.

use crate::tour::{MonthlyPlan, TourStats};
use crate::user::User;

use common::RedactedToken;

use serde::{Deserialize, Serialize};

/// The inner `{ "data": ... }` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataWrapper<T> {
    pub data: T,
}

/// `{ status, results, data: { data: [T] } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<u64>,
    pub data: DataWrapper<Vec<T>>,
}

impl<T> ListResponse<T> {
    pub fn items(&self) -> &[T] {
        &self.data.data
    }

    pub fn into_items(self) -> Vec<T> {
        self.data.data
    }
}

/// `{ status, data: { data: T } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResponse<T> {
    pub status: String,
    pub data: DataWrapper<T>,
}

impl<T> DocumentResponse<T> {
    pub fn into_document(self) -> T {
        self.data.data
    }
}

/// `{ status, data: { stats: [...] } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub status: String,
    pub data: StatsData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsData {
    #[serde(default)]
    pub stats: Vec<TourStats>,
}

/// `{ status, data: { plan: [...] } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    pub status: String,
    pub data: PlanData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanData {
    #[serde(default)]
    pub plan: Vec<MonthlyPlan>,
}

/// `{ status, data: { user } }` as returned by `PATCH /users/updateMe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub status: String,
    pub data: UserData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub user: User,
}

/// Login, signup, password reset and password change responses.
///
/// `token` and `data.user` are both present when the backend opens a session;
/// signup flows that require email verification only send `message`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub status: String,
    #[serde(default)]
    pub token: Option<RedactedToken>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<UserData>,
}

impl AuthResponse {
    pub fn user(&self) -> Option<&User> {
        self.data.as_ref().map(|data| &data.user)
    }
}

/// `{ status, message }` for endpoints that only acknowledge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
