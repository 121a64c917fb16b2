pub mod builder;

use crate::record_id::{Identified, RecordId, Reference};
use crate::user::{User, UserSummary};

use serde::{Deserialize, Serialize};

/// The `tour` side of a review when the backend populates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourSummary {
    #[serde(flatten)]
    pub ident: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Identified for TourSummary {
    fn record_id(&self) -> Option<&str> {
        self.ident.as_str()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Review {
    #[serde(flatten)]
    pub ident: RecordId,
    pub review: String,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour: Option<Reference<TourSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Reference<UserSummary>>,
}

impl Review {
    pub fn id(&self) -> Option<&str> {
        self.ident.as_str()
    }

    /// Whether `user_id` wrote this review, with the author either populated or a bare id.
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.user
            .as_ref()
            .and_then(Reference::id)
            .is_some_and(|author| author == user_id)
    }
}

/// Body for `PATCH /reviews/:id`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// Reviews a viewer is allowed to manage: admins see everything, others only their own.
pub fn visible_reviews(reviews: Vec<Review>, viewer: &User) -> Vec<Review> {
    if viewer.is_admin() {
        return reviews;
    }

    match viewer.id() {
        Some(viewer_id) => reviews
            .into_iter()
            .filter(|review| review.is_authored_by(viewer_id))
            .collect(),
        None => Vec::new(),
    }
}
