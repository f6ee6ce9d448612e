use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::models::experience::ExperiencePackage;
use crate::models::order::BookingRequest;
use crate::services::pricing_service::{PricingBreakdown, PricingService};
use crate::session::Session;

/// Why a booking attempt was turned away before any request went out.
/// These carry the message shown to the user; none of them is a crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingRejection {
    #[error("Please login to book this experience")]
    NotSignedIn,
    #[error("Please select a journey start date")]
    MissingStartDate,
    #[error("Journey start date cannot be in the past")]
    StartDateInPast,
}

/// The summary a user confirms before the order is placed: date range,
/// participant count and the full price breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub participants: u32,
    pub pricing: PricingBreakdown,
}

impl BookingConfirmation {
    /// Wire payload for the booking endpoint. `coupon_code` should be the
    /// code that produced the discount in `pricing`, or `None`.
    pub fn to_request(&self, coupon_code: Option<String>) -> BookingRequest {
        BookingRequest {
            number_of_people: self.participants,
            coupon_code,
            start_date: self.start_date,
        }
    }
}

pub struct BookingService;

impl BookingService {
    /// Calendar-day addition, no timezone involved: a 5-day journey starting
    /// Jan 1 ends Jan 6.
    pub fn compute_end_date(start_date: NaiveDate, duration_days: u32) -> NaiveDate {
        start_date + Days::new(u64::from(duration_days))
    }

    /// Validate a booking attempt and derive the confirmation summary.
    ///
    /// Runs entirely locally; a rejection means no request is made. The
    /// seat count is clamped to the package capacity and the discount is
    /// expected to come from an already-validated coupon (0 otherwise).
    pub fn confirm(
        package: &ExperiencePackage,
        session: Option<&Session>,
        start_date: Option<NaiveDate>,
        quantity: u32,
        discount_percentage: f64,
        today: NaiveDate,
    ) -> Result<BookingConfirmation, BookingRejection> {
        if session.is_none() {
            return Err(BookingRejection::NotSignedIn);
        }
        let start_date = start_date.ok_or(BookingRejection::MissingStartDate)?;
        if start_date < today {
            return Err(BookingRejection::StartDateInPast);
        }

        let participants = PricingService::clamp_quantity(quantity, package.available_slots);
        let pricing = PricingService::quote(package.price, participants, discount_percentage);

        Ok(BookingConfirmation {
            start_date,
            // Legacy packages can carry duration 0; treat them as one day.
            end_date: Self::compute_end_date(start_date, package.duration.max(1)),
            participants,
            pricing,
        })
    }
}
