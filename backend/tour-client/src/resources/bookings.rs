use crate::api_client::{ApiClient, ApiRequest};
use crate::error::ApiError;

use models::{Booking, BookingVerification, CheckoutResponse, CheckoutSession, ListResponse};

const BOOKINGS_NOT_IMPLEMENTED: &str = "Booking functionality not yet implemented in backend";

pub fn checkout_session_request(tour_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/bookings/checkout-session/{tour_id}"))
}

pub fn verify_request(tx_ref: &str) -> ApiRequest {
    ApiRequest::get(format!("/bookings/verify/{tx_ref}"))
}

pub fn my_bookings_request() -> ApiRequest {
    ApiRequest::get("/bookings/me")
}

pub struct BookingsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BookingsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Not supported by the backend. Fails immediately without I/O.
    #[track_caller]
    pub fn get_all(&self) -> Result<Vec<Booking>, ApiError> {
        Err(ApiError::not_implemented("bookings.get_all", BOOKINGS_NOT_IMPLEMENTED))
    }

    /// Not supported by the backend. Fails immediately without I/O.
    #[track_caller]
    pub fn get_by_id(&self, _id: &str) -> Result<Booking, ApiError> {
        Err(ApiError::not_implemented("bookings.get_by_id", BOOKINGS_NOT_IMPLEMENTED))
    }

    /// Open a payment-gateway checkout session for `tour_id`.
    pub async fn create(&self, tour_id: &str) -> Result<CheckoutSession, ApiError> {
        let response: CheckoutResponse =
            self.client.execute(checkout_session_request(tour_id)).await?;
        Ok(response.data)
    }

    pub async fn verify(&self, tx_ref: &str) -> Result<BookingVerification, ApiError> {
        self.client.execute(verify_request(tx_ref)).await
    }

    pub async fn get_my_bookings(&self) -> Result<ListResponse<Booking>, ApiError> {
        self.client.execute(my_bookings_request()).await
    }
}
