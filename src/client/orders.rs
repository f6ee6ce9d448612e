use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ClientError;
use crate::models::coupon::Coupon;
use crate::models::order::{BookingReceipt, BookingRequest, OrderHistory};
use crate::session::Session;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateCouponRequest<'a> {
    package_id: &'a str,
    coupon_code: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateCouponResponse {
    discount_percentage: f64,
}

#[derive(Debug, Deserialize)]
struct CouponsResponse {
    // Omitted entirely when a package has no active coupons
    #[serde(default)]
    coupons: Vec<Coupon>,
}

impl ApiClient {
    /// Coupons advertised for a package on its detail page.
    pub async fn coupons_for(&self, package_id: &str) -> Result<Vec<Coupon>, ClientError> {
        let url = self.endpoint(&format!("/api/order/coupons/{}", package_id))?;
        let response = self.http.get(url).send().await?;
        let body: CouponsResponse = Self::parse(response).await?;
        Ok(body.coupons)
    }

    /// Ask the backend whether a coupon applies to a package, returning the
    /// discount percentage when it does.
    ///
    /// Blank codes are rejected locally without a request, and codes are
    /// normalized to upper case the way the checkout form enters them.
    pub async fn validate_coupon(
        &self,
        package_id: &str,
        code: &str,
    ) -> Result<f64, ClientError> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(ClientError::EmptyCouponCode);
        }

        let url = self.endpoint("/api/order/validate-coupon")?;
        let response = self
            .http
            .post(url)
            .json(&ValidateCouponRequest {
                package_id,
                coupon_code: &code,
            })
            .send()
            .await?;
        let body: ValidateCouponResponse = Self::parse(response).await?;
        Ok(body.discount_percentage)
    }

    /// Place the order. Callers are expected to have run
    /// `BookingService::confirm` first; the backend re-validates everything
    /// anyway.
    pub async fn book_experience(
        &self,
        session: &Session,
        package_id: &str,
        request: &BookingRequest,
    ) -> Result<BookingReceipt, ClientError> {
        let url = self.endpoint(&format!("/api/order/experiences/{}/book", package_id))?;
        let response = self
            .authorized(self.http.post(url), session)
            .json(request)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Order history, split by the backend into upcoming and past journeys.
    pub async fn my_orders(&self, session: &Session) -> Result<OrderHistory, ClientError> {
        let url = self.endpoint("/api/order/my-orders")?;
        let response = self.authorized(self.http.get(url), session).send().await?;
        Self::parse(response).await
    }
}
