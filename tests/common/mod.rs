use std::net::TcpListener;

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use serde_json::json;

use horizon_client::client::ApiClient;
use horizon_client::config::ApiConfig;
use horizon_client::models::user::UserProfile;
use horizon_client::session::Session;

pub const TEST_TOKEN: &str = "test-token-abc";
pub const TEST_EMAIL: &str = "traveler@example.com";
pub const TEST_PASSWORD: &str = "hunter2hunter2";

/// In-process stand-in for the booking backend, serving the canned JSON
/// shapes the real API returns. Bound to an ephemeral port so tests can
/// run side by side.
pub struct MockBackend {
    pub base_url: String,
    handle: ServerHandle,
}

impl MockBackend {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");

        let server = HttpServer::new(|| {
            App::new()
                .route("/api/experiences", web::get().to(list_experiences))
                .route("/api/experiences/{id}", web::get().to(experience_detail))
                .route(
                    "/api/experiences/{id}/favourite",
                    web::post().to(toggle_favourite),
                )
                .route(
                    "/api/experiences/{id}/favourite",
                    web::delete().to(toggle_favourite),
                )
                .route("/api/order/coupons/{id}", web::get().to(coupons_for))
                .route("/api/order/validate-coupon", web::post().to(validate_coupon))
                .route("/api/order/experiences/{id}/book", web::post().to(book))
                .route("/api/order/my-orders", web::get().to(my_orders))
                .route("/api/auth/login", web::post().to(login))
                .route("/api/auth/register", web::post().to(register))
                .route("/api/auth/verify-email", web::get().to(verify_email))
        })
        .workers(1)
        .listen(listener)
        .expect("listen on mock backend port")
        .run();

        let handle = server.handle();
        actix_rt::spawn(server);

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

pub fn client_for(backend: &MockBackend) -> ApiClient {
    let config = ApiConfig {
        base_url: backend.base_url.clone(),
        session_file: std::env::temp_dir()
            .join(format!("horizon-test-session-{}.json", std::process::id())),
    };
    ApiClient::new(&config).expect("client for mock backend")
}

pub fn test_session() -> Session {
    Session {
        token: TEST_TOKEN.to_string(),
        user: test_profile(),
    }
}

pub fn test_profile() -> UserProfile {
    UserProfile {
        id: "u1".to_string(),
        email: TEST_EMAIL.to_string(),
        username: "traveler".to_string(),
        role: "user".to_string(),
    }
}

fn bearer_ok(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {}", TEST_TOKEN))
        .unwrap_or(false)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({"error": "Unauthorized"}))
}

fn valley_trek() -> serde_json::Value {
    json!({
        "id": "exp-1",
        "title": "Valley Trek",
        "description": "Five days in the valley",
        "thumbnailImages": ["https://cdn.example.com/valley.jpg"],
        "location": "Manali",
        "price": 1000.0,
        "duration": 5,
        "availableSlots": 8,
        "itinerary": "Day 1: arrive",
        "inclusions": "Meals",
        "exclusions": "Flights"
    })
}

async fn list_experiences() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "experiences": [
            {
                "id": "exp-1",
                "title": "Valley Trek",
                "description": "Five days in the valley",
                "thumbnailImages": ["https://cdn.example.com/valley.jpg"],
                "location": "Manali",
                "price": 1000.0
            },
            {
                "id": "exp-2",
                "title": "Desert Safari",
                "description": "Dunes at dawn",
                "thumbnailImages": [],
                "location": "Jaisalmer",
                "price": 1450.0
            }
        ]
    }))
}

async fn experience_detail(path: web::Path<String>) -> impl Responder {
    match path.as_str() {
        "exp-1" => HttpResponse::Ok().json(json!({"package": valley_trek()})),
        "exp-2" => {
            let mut package = valley_trek();
            package["id"] = json!("exp-2");
            package["title"] = json!("Desert Safari");
            if let Some(obj) = package.as_object_mut() {
                // The backend omits the free-form text blocks here
                obj.remove("itinerary");
                obj.remove("inclusions");
                obj.remove("exclusions");
            }
            HttpResponse::Ok().json(json!({"package": package}))
        }
        _ => HttpResponse::NotFound().json(json!({"message": "Package not found"})),
    }
}

async fn toggle_favourite(req: HttpRequest) -> impl Responder {
    if !bearer_ok(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

async fn coupons_for(path: web::Path<String>) -> impl Responder {
    match path.as_str() {
        "exp-1" => HttpResponse::Ok().json(json!({
            "coupons": [
                {
                    "id": 1,
                    "code": "SAVE10",
                    "discountPercentage": 10.0,
                    "validFrom": "2030-01-01",
                    "validUntil": "2030-12-31"
                }
            ]
        })),
        // No active coupons: the key is omitted entirely
        _ => HttpResponse::Ok().json(json!({})),
    }
}

async fn validate_coupon(body: web::Json<serde_json::Value>) -> impl Responder {
    let code = body["couponCode"].as_str().unwrap_or_default();
    if body["packageId"].as_str().unwrap_or_default() == "exp-1" && code == "SAVE10" {
        HttpResponse::Ok().json(json!({"discountPercentage": 10.0}))
    } else {
        HttpResponse::BadRequest().json(json!({"message": "Invalid coupon code"}))
    }
}

async fn book(req: HttpRequest, body: web::Json<serde_json::Value>) -> impl Responder {
    if !bearer_ok(&req) {
        return unauthorized();
    }
    if body.get("numberOfPeople").is_none() || body.get("startDate").is_none() {
        return HttpResponse::BadRequest().json(json!({"message": "Missing booking fields"}));
    }

    let saved_amount = if body.get("couponCode").is_some() {
        200.0
    } else {
        0.0
    };
    HttpResponse::Ok().json(json!({
        "order": {"id": 9001},
        "savedAmount": saved_amount
    }))
}

async fn my_orders(req: HttpRequest) -> impl Responder {
    if !bearer_ok(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({
        "upcomingJourneys": [
            {
                "id": 9001,
                "start": "2030-05-01T00:00:00Z",
                "end": "2030-05-06T00:00:00Z",
                "numberOfPeople": 2,
                "totalPrice": 2360.0,
                "yourPrice": 2124.0,
                "status": "confirmed",
                "paymentMethod": "card",
                "completed": false,
                "package": {
                    "id": "exp-1",
                    "title": "Valley Trek",
                    "description": "Five days in the valley",
                    "location": "Manali",
                    "price": 1000.0,
                    "duration": 5,
                    "thumbnailImages": []
                }
            }
        ],
        "pastJourneys": []
    }))
}

async fn login(body: web::Json<serde_json::Value>) -> impl Responder {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if email == TEST_EMAIL && password == TEST_PASSWORD {
        HttpResponse::Ok().json(json!({
            "token": TEST_TOKEN,
            "user": {
                "id": "u1",
                "email": TEST_EMAIL,
                "username": "traveler",
                "role": "user"
            }
        }))
    } else {
        HttpResponse::Unauthorized().json(json!({"error": "Invalid credentials"}))
    }
}

async fn register(body: web::Json<serde_json::Value>) -> impl Responder {
    if body["username"].as_str().unwrap_or_default().is_empty() {
        return HttpResponse::BadRequest().json(json!({"message": "Username is required"}));
    }
    HttpResponse::Ok().json(json!({"message": "Registration email sent"}))
}

async fn verify_email(
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    match query.get("token").map(String::as_str) {
        Some("good-token") => {
            HttpResponse::Ok().json(json!({"message": "Email verified successfully!"}))
        }
        _ => HttpResponse::BadRequest()
            .json(json!({"message": "Verification failed. Link may have expired."})),
    }
}
