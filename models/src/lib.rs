//! Data transfer objects returned by the tour backend.
//!
//! These are pass-through shapes: the client does not own them and performs
//! no validation beyond what a form would check before submitting. Every
//! struct is lenient on deserialization so that field projections
//! (`?fields=name,price`) still decode.

pub mod auth;
pub mod booking;
pub mod envelope;
pub mod error;
pub mod record_id;
pub mod review;
pub mod tour;
pub mod user;

pub use auth::{ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest};
pub use booking::{Booking, BookingVerification, CheckoutResponse, CheckoutSession, VerifiedBooking};
pub use envelope::{
    AuthResponse, DataWrapper, DocumentResponse, ListResponse, MessageResponse, PlanResponse,
    StatsResponse, UserResponse,
};
pub use error::model_error::ModelError;
pub use record_id::{Identified, RecordId, Reference};
pub use review::builder::{ReviewDraft, ReviewDraftBuilder};
pub use review::{Review, ReviewUpdate, TourSummary, visible_reviews};
pub use tour::{
    Difficulty, DistanceUnit, GeoLocation, MonthlyPlan, Tour, TourDistance, TourInput, TourStats,
};
pub use user::{NewUser, PasswordChange, Role, User, UserSummary, UserUpdate};

#[cfg(test)]
mod tests;
