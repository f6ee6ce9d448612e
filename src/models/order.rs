use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Condensed package carried inside each order in the history view.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPackage {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: f64,
    pub duration: u32,
    pub thumbnail_images: Vec<String>,
}

/// A placed order as returned by `GET /api/order/my-orders`.
///
/// `total_price` is the undiscounted amount; `your_price` is what was
/// actually charged after coupons.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub number_of_people: u32,
    pub total_price: f64,
    pub your_price: f64,
    pub status: String,
    pub payment_method: String,
    pub completed: bool,
    pub package: OrderPackage,
}

impl Order {
    /// Discount actually realized on this order.
    pub fn saved_amount(&self) -> f64 {
        self.total_price - self.your_price
    }

    /// Whether the journey still lies ahead of `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start > now
    }
}

/// Order history, already split into buckets by the backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistory {
    #[serde(default)]
    pub upcoming_journeys: Vec<Order>,
    #[serde(default)]
    pub past_journeys: Vec<Order>,
}

/// Payload of `POST /api/order/experiences/{id}/book`. The coupon code is
/// omitted from the JSON entirely when none was applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub number_of_people: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    pub start_date: NaiveDate,
}

/// What the backend hands back after a successful booking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    pub order: CreatedOrder,
    #[serde(default)]
    pub saved_amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedOrder {
    pub id: i64,
}
