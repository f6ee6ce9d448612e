use serde::{Deserialize, Serialize};

/// A code conferring a percentage discount on one package, advertised by
/// `GET /api/order/coupons/{id}`. Validity is enforced server-side; the
/// date bounds are carried only for display.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: i64,
    pub code: String,
    pub discount_percentage: f64,
    pub valid_from: String,
    pub valid_until: String,
}
