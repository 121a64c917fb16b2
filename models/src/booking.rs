use crate::record_id::{RecordId, Reference};
use crate::review::TourSummary;
use crate::user::UserSummary;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Booking {
    #[serde(flatten)]
    pub ident: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour: Option<Reference<TourSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Reference<UserSummary>>,
    pub price: f64,
    pub paid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Booking {
    pub fn id(&self) -> Option<&str> {
        self.ident.as_str()
    }
}

/// Payload of `GET /bookings/checkout-session/:tourId`.
///
/// The payment gateway decides most of the shape; the hosted checkout URL and the
/// transaction reference are surfaced, anything else is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutSession {
    #[serde(alias = "checkoutUrl", skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,
    #[serde(alias = "txRef", skip_serializing_if = "Option::is_none")]
    pub tx_ref: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `{ status, data: { checkout_url, tx_ref, ... } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutResponse {
    pub status: String,
    pub data: CheckoutSession,
}

/// Response of `GET /bookings/verify/:txRef`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingVerification {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<VerifiedBooking>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifiedBooking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
}
