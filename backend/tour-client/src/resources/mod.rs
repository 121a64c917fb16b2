//! Named wrappers over [`ApiClient::request`](crate::ApiClient::request), one per backend endpoint.
//!
//! Each wrapper fixes a path template and a body shape. The matching
//! `*_request` function builds the [`ApiRequest`](crate::ApiRequest) without
//! sending it, so endpoint shapes can be checked without a network double.

pub mod auth;
pub mod bookings;
pub mod reviews;
pub mod tours;
pub mod users;

pub use auth::AuthApi;
pub use bookings::BookingsApi;
pub use reviews::ReviewsApi;
pub use tours::ToursApi;
pub use users::UsersApi;
