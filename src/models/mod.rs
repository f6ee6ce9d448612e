pub mod coupon;
pub mod experience;
pub mod order;
pub mod user;
