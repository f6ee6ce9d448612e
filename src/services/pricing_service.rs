/// Tax rate applied to every booking, matching the backend's checkout math.
pub const TAX_RATE: f64 = 0.18;

/// Line-item breakdown shown in the checkout panel. Derived values only,
/// recomputed from scratch on every input change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingBreakdown {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub taxable_amount: f64,
    pub tax_amount: f64,
    pub total: f64,
}

pub struct PricingService;

impl PricingService {
    /// Compute the checkout breakdown for `quantity` seats at `unit_price`.
    ///
    /// `discount_percentage` is a validated coupon percentage in [0, 100];
    /// pass 0 when no coupon has been accepted. Inputs are not validated
    /// here: quantity 0 simply yields an all-zero breakdown.
    pub fn compute(
        unit_price: f64,
        quantity: u32,
        discount_percentage: f64,
        tax_rate: f64,
    ) -> PricingBreakdown {
        let subtotal = unit_price * f64::from(quantity);
        let discount_amount = subtotal * (discount_percentage / 100.0);
        let taxable_amount = subtotal - discount_amount;
        let tax_amount = taxable_amount * tax_rate;
        let total = taxable_amount + tax_amount;

        PricingBreakdown {
            subtotal,
            discount_amount,
            taxable_amount,
            tax_amount,
            total,
        }
    }

    /// Breakdown at the standard [`TAX_RATE`].
    pub fn quote(unit_price: f64, quantity: u32, discount_percentage: f64) -> PricingBreakdown {
        Self::compute(unit_price, quantity, discount_percentage, TAX_RATE)
    }

    /// Clamp a requested seat count to `[1, available_slots]`, the range the
    /// quantity stepper in the detail view allows.
    pub fn clamp_quantity(requested: u32, available_slots: u32) -> u32 {
        requested.clamp(1, available_slots.max(1))
    }
}
