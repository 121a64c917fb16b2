use crate::error::model_error::ModelError;

use common::ErrorLocation;

use std::ops::RangeInclusive;
use std::panic::Location;

use serde::Serialize;

const RATING_RANGE: RangeInclusive<u8> = 1..=5;

/// Body for `POST /reviews` and `POST /tours/:tourId/reviews`.
///
/// `tour` is only sent on the top-level endpoint; the nested one takes it from the path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewDraft {
    pub review: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour: Option<String>,
}

/// Builder for review submissions.
///
/// Performs the same "missing fields" checks a review form does before submitting.
#[derive(Debug, Default)]
pub struct ReviewDraftBuilder {
    review: Option<String>,
    rating: Option<u8>,
    tour: Option<String>,
}

impl ReviewDraftBuilder {
    pub fn with_review(mut self, review: impl Into<String>) -> Self {
        self.review = Some(review.into());
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_tour(mut self, tour_id: impl Into<String>) -> Self {
        self.tour = Some(tour_id.into());
        self
    }

    #[track_caller]
    pub fn build(self) -> Result<ReviewDraft, ModelError> {
        let review = self.review.ok_or_else(|| ModelError::Validation {
            field: "review",
            message: String::from("Review text is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if review.trim().is_empty() {
            return Err(ModelError::Validation {
                field: "review",
                message: String::from("Review text cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let rating = self.rating.ok_or_else(|| ModelError::Validation {
            field: "rating",
            message: String::from("Rating is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !RATING_RANGE.contains(&rating) {
            return Err(ModelError::Validation {
                field: "rating",
                message: format!(
                    "Rating must be between {} and {}, got {rating}",
                    RATING_RANGE.start(),
                    RATING_RANGE.end()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(ReviewDraft {
            review,
            rating,
            tour: self.tour,
        })
    }
}
