use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::models::experience::{ExperiencePackage, ExperienceSummary};
use crate::models::order::Order;
use crate::services::booking_service::{BookingRejection, BookingService};
use crate::services::pricing_service::{PricingBreakdown, PricingService};
use crate::session::SessionStore;

#[derive(Parser)]
#[command(name = "horizon", version, about = "Horizon experience booking client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Browse the experience catalog
    Experiences,
    /// Show one experience with its coupons and a price preview
    Show {
        /// Experience id
        id: String,
        /// Seats to price
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
        /// Coupon code to validate against this package
        #[arg(short, long)]
        coupon: Option<String>,
    },
    /// Book an experience
    Book {
        /// Experience id
        id: String,
        /// Journey start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// Number of participants
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
        /// Coupon code to apply
        #[arg(short, long)]
        coupon: Option<String>,
    },
    /// List upcoming and past journeys
    Orders,
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account (sends a verification email)
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Complete registration with the emailed token
    VerifyEmail { token: String },
    /// Drop the stored session
    Logout,
}

pub async fn run(cli: Cli) -> Result<(), ClientError> {
    let config = ApiConfig::from_env();
    let store = SessionStore::new(&config.session_file);
    let client = ApiClient::new(&config)?;

    match cli.command {
        Command::Experiences => {
            let experiences = client.list_experiences().await?;
            render_catalog(&experiences);
        }
        Command::Show {
            id,
            quantity,
            coupon,
        } => {
            let (package, coupons) = client.experience_with_coupons(&id).await?;
            let discount = match coupon {
                Some(code) => apply_coupon(&client, &id, &code).await.unwrap_or(0.0),
                None => 0.0,
            };

            render_package(&package);
            if !coupons.is_empty() {
                println!("Available coupons:");
                for coupon in &coupons {
                    println!("  {:<12} {}% off", coupon.code, coupon.discount_percentage);
                }
                println!();
            }

            let quantity = PricingService::clamp_quantity(quantity, package.available_slots);
            let pricing = PricingService::quote(package.price, quantity, discount);
            render_pricing(&pricing, discount, quantity);
        }
        Command::Book {
            id,
            start_date,
            quantity,
            coupon,
        } => {
            let Some(session) = store.load() else {
                eprintln!("{}", BookingRejection::NotSignedIn);
                return Ok(());
            };

            let package = client.experience_detail(&id).await?;

            // An invalid coupon drops the discount, it does not block booking
            let mut applied_code = None;
            let mut discount = 0.0;
            if let Some(code) = coupon {
                if let Some(percentage) = apply_coupon(&client, &id, &code).await {
                    discount = percentage;
                    applied_code = Some(code.trim().to_uppercase());
                }
            }

            let today = Local::now().date_naive();
            let confirmation = match BookingService::confirm(
                &package,
                Some(&session),
                start_date,
                quantity,
                discount,
                today,
            ) {
                Ok(confirmation) => confirmation,
                Err(rejection) => {
                    eprintln!("{}", rejection);
                    return Ok(());
                }
            };

            println!(
                "Booking {} person(s), {} to {}, total ₹{:.2}",
                confirmation.participants,
                confirmation.start_date,
                confirmation.end_date,
                confirmation.pricing.total
            );

            let request = confirmation.to_request(applied_code);
            let receipt = client.book_experience(&session, &id, &request).await?;

            println!("🎉 Booking successful!");
            println!("Order ID: {}", receipt.order.id);
            println!("Experience: {}", package.title);
            println!("Participants: {}", confirmation.participants);
            println!("Total paid: ₹{:.2}", confirmation.pricing.total);
            if receipt.saved_amount > 0.0 {
                println!("You saved ₹{:.2}!", receipt.saved_amount);
            }
            println!("A confirmation email has been sent to your registered address.");
        }
        Command::Orders => {
            let Some(session) = store.load() else {
                eprintln!("Please login to view your bookings");
                return Ok(());
            };

            let history = client.my_orders(&session).await?;
            if history.upcoming_journeys.is_empty() && history.past_journeys.is_empty() {
                println!("No bookings yet. Start your adventure by booking an experience!");
                return Ok(());
            }

            if !history.upcoming_journeys.is_empty() {
                println!("Upcoming journeys ({})", history.upcoming_journeys.len());
                for order in &history.upcoming_journeys {
                    render_order(order);
                }
            }
            if !history.past_journeys.is_empty() {
                println!("Past journeys ({})", history.past_journeys.len());
                for order in &history.past_journeys {
                    render_order(order);
                }
            }
        }
        Command::Login { email, password } => {
            let session = client.login(&email, &password).await?;
            store.save(&session)?;
            println!("Welcome, {}", session.user.username);
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let message = client.register(&username, &email, &password).await?;
            println!("{}", message);
        }
        Command::VerifyEmail { token } => {
            let message = client.verify_email(&token).await?;
            println!("{}", message);
        }
        Command::Logout => {
            store.clear()?;
            println!("Signed out");
        }
    }

    Ok(())
}

/// Validate a coupon, reporting the outcome the way the checkout form does.
/// Returns the discount percentage when accepted.
async fn apply_coupon(client: &ApiClient, package_id: &str, code: &str) -> Option<f64> {
    match client.validate_coupon(package_id, code).await {
        Ok(percentage) => {
            println!("Coupon applied! {}% off", percentage);
            Some(percentage)
        }
        Err(err) => {
            eprintln!("{}", err);
            None
        }
    }
}

fn render_catalog(experiences: &[ExperienceSummary]) {
    if experiences.is_empty() {
        println!("No experiences available right now.");
        return;
    }
    for exp in experiences {
        println!("{:<12} ₹{:<10.2} {:<20} {}", exp.id, exp.price, exp.location, exp.title);
    }
}

fn render_package(package: &ExperiencePackage) {
    println!("{} — {} ({} days)", package.title, package.location, package.duration);
    println!("Starts at ₹{} per person", package.price);
    println!("{} slots available", package.available_slots);
    println!();
    println!("{}", package.description);
    if !package.itinerary.is_empty() {
        println!("\nItinerary:\n{}", package.itinerary);
    }
    if !package.inclusions.is_empty() {
        println!("\nInclusions:\n{}", package.inclusions);
    }
    if !package.exclusions.is_empty() {
        println!("\nExclusions:\n{}", package.exclusions);
    }
    println!();
}

fn render_pricing(pricing: &PricingBreakdown, discount: f64, quantity: u32) {
    println!("Price for {} person(s):", quantity);
    println!("  Subtotal        ₹{:.2}", pricing.subtotal);
    if discount > 0.0 {
        println!("  Discount ({}%)  -₹{:.2}", discount, pricing.discount_amount);
    }
    println!("  Taxes (18%)     ₹{:.2}", pricing.tax_amount);
    println!("  Total           ₹{:.2}", pricing.total);
}

fn render_order(order: &Order) {
    println!(
        "  #{} {} — {} | {} to {} | {} person(s) | {}",
        order.id,
        order.package.title,
        order.package.location,
        order.start.format("%Y-%m-%d"),
        order.end.format("%Y-%m-%d"),
        order.number_of_people,
        order.status
    );
    if order.saved_amount() > 0.0 {
        println!(
            "     paid ₹{:.2} (saved ₹{:.2})",
            order.your_price,
            order.saved_amount()
        );
    } else {
        println!("     paid ₹{:.2}", order.your_price);
    }
}
