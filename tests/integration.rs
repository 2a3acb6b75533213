// SPDX-License-Identifier: MPL-2.0
use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use travel_desk::api::BookingApi;
use travel_desk::application::port::{HttpRequest, HttpResponse, Method, Transport};
use travel_desk::config::{self, Config};
use travel_desk::domain::{BookingStatus, NewBooking, NewPassenger, SearchQuery, TravelType};
use travel_desk::error::{Error, Result};
use travel_desk::gateway::{Gateway, Outcome, RequestOptions, FALLBACK_MESSAGE};
use travel_desk::ui::theming::ThemeMode;

/// Backend stand-in: answers with queued responses and keeps a cookie jar.
#[derive(Default)]
struct FakeBackend {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    sent: Mutex<Vec<HttpRequest>>,
    cookies: Option<String>,
}

impl FakeBackend {
    fn with_csrf(token: &str) -> Self {
        Self {
            cookies: Some(format!("sessionid=abc; csrftoken={token}")),
            ..Self::default()
        }
    }

    fn reply(self, status: u16, body: serde_json::Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body.to_string())));
        self
    }

    fn reply_raw(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    fn unreachable(self) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(Error::Transport("connection refused".into())));
        self
    }

    fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.sent.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("no scripted response".into())))
    }

    fn cookie_header(&self, _url: &str) -> Option<String> {
        self.cookies.clone()
    }
}

fn api_over(backend: &Arc<FakeBackend>) -> BookingApi {
    let transport: Arc<dyn Transport> = backend.clone();
    let gateway = Gateway::new(transport, "http://127.0.0.1:8000", "csrftoken").unwrap();
    BookingApi::new(gateway)
}

fn travel_option(id: u64) -> serde_json::Value {
    json!({
        "travel_id": id,
        "type": "flight",
        "operator_name": "IndiGo",
        "source": "Bengaluru",
        "destination": "Goa",
        "departure_date": "2026-12-01",
        "departure_time": "07:05:00",
        "arrival_date": "2026-12-01",
        "arrival_time": "08:20:00",
        "duration": "01:15:00",
        "price": "3899.00",
        "available_seats": 12,
        "total_seats": 180
    })
}

fn booking(id: u64, status: &str) -> serde_json::Value {
    json!({
        "booking_id": id,
        "reference_number": "b7e0c9d2-1111-4a2b-8c3d-000000000001",
        "travel_option": travel_option(3),
        "number_of_seats": 1,
        "passenger_details": [{"name": "Meera", "age": 29}],
        "total_price": "3899.00",
        "booking_date": "2026-10-18T11:00:00Z",
        "status": status
    })
}

#[tokio::test]
async fn csrf_token_from_cookie_jar_is_attached() {
    let backend = Arc::new(FakeBackend::with_csrf("tok123").reply(200, json!({"ok": true})));
    let transport: Arc<dyn Transport> = backend.clone();
    let gateway = Gateway::new(transport, "http://127.0.0.1:8000", "csrftoken").unwrap();

    let outcome = gateway
        .request("/api/bookings/", RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Success(json!({"ok": true})));
    let sent = backend.sent();
    assert_eq!(sent[0].url, "http://127.0.0.1:8000/api/bookings/");
    assert_eq!(sent[0].header("x-csrftoken"), Some("tok123"));
    assert_eq!(sent[0].header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn caller_headers_override_defaults() {
    let backend = Arc::new(FakeBackend::default().reply(200, json!({})));
    let transport: Arc<dyn Transport> = backend.clone();
    let gateway = Gateway::new(transport, "http://127.0.0.1:8000", "csrftoken").unwrap();

    gateway
        .request(
            "/api/login/",
            RequestOptions::post().header("content-type", "text/plain"),
        )
        .await
        .unwrap();

    let sent = backend.sent();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].header("Content-Type"), Some("text/plain"));
    assert_eq!(sent[0].header("X-CSRFToken"), None);
    assert_eq!(sent[0].headers.len(), 1);
}

#[tokio::test]
async fn validation_errors_are_joined_into_one_message() {
    let backend = Arc::new(FakeBackend::default().reply(
        400,
        json!({
            "number_of_seats": ["Only 2 seats available"],
            "non_field_errors": ["Travel date has passed"]
        }),
    ));
    let api = api_over(&backend);

    let error = api.list_bookings().await.unwrap_err();

    match error {
        Error::Rejected(rejection) => {
            assert_eq!(rejection.status, 400);
            assert_eq!(
                rejection.message,
                "Only 2 seats available. Travel date has passed"
            );
            assert_eq!(rejection.details.len(), 2);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn unreadable_error_body_falls_back() {
    let backend = Arc::new(FakeBackend::default().reply(500, json!({"detail": 42})));
    let api = api_over(&backend);

    let error = api.fetch_booking(9).await.unwrap_err();
    assert_eq!(error.user_message(), FALLBACK_MESSAGE);
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let backend = Arc::new(FakeBackend::default().reply_raw(502, "<html>Bad Gateway</html>"));
    let api = api_over(&backend);

    assert!(matches!(api.list_bookings().await, Err(Error::Decode(_))));
}

#[tokio::test]
async fn network_failure_is_a_transport_error() {
    let backend = Arc::new(FakeBackend::default().unreachable());
    let api = api_over(&backend);

    assert!(matches!(api.logout().await, Err(Error::Transport(_))));
}

#[tokio::test]
async fn search_sends_only_filled_filters() {
    let backend = Arc::new(FakeBackend::default().reply(200, json!([travel_option(3)])));
    let api = api_over(&backend);
    let query = SearchQuery {
        travel_type: Some(TravelType::Flight),
        source: "Bengaluru".into(),
        destination: "Goa".into(),
        ..SearchQuery::default()
    };

    let options = api.search(&query).await.unwrap();

    assert_eq!(options.len(), 1);
    assert_eq!(options[0].travel_type, TravelType::Flight);
    let url = &backend.sent()[0].url;
    assert!(url.contains("type=flight"), "{url}");
    assert!(url.contains("source=Bengaluru"), "{url}");
    assert!(!url.contains("min_price"), "{url}");
}

#[tokio::test]
async fn paginated_booking_list_is_unwrapped() {
    let backend = Arc::new(FakeBackend::default().reply(
        200,
        json!({"count": 2, "next": null, "previous": null,
               "results": [booking(1, "confirmed"), booking(2, "cancelled")]}),
    ));
    let api = api_over(&backend);

    let bookings = api.list_bookings().await.unwrap();

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[1].status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn create_booking_posts_backend_payload() {
    let backend = Arc::new(
        FakeBackend::with_csrf("tok").reply(201, json!({"travel_option": 3, "number_of_seats": 1})),
    );
    let api = api_over(&backend);
    let new_booking = NewBooking {
        travel_option: 3,
        number_of_seats: 1,
        passenger_details: vec![NewPassenger {
            name: "Meera".into(),
            age: "29".into(),
        }],
    };

    api.create_booking(&new_booking).await.unwrap();

    let sent = backend.sent();
    assert_eq!(sent[0].method, Method::Post);
    assert!(sent[0].url.ends_with("/api/bookings/"));
    let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["travel_option"], 3);
    assert_eq!(body["passenger_details"][0]["name"], "Meera");
}

#[tokio::test]
async fn cancel_then_reload_sees_cancelled_status() {
    let backend = Arc::new(
        FakeBackend::with_csrf("tok")
            .reply(200, json!({"message": "Booking cancelled successfully"}))
            .reply(200, booking(5, "cancelled")),
    );
    let api = api_over(&backend);

    api.cancel_booking(5).await.unwrap();
    let reloaded = api.fetch_booking(5).await.unwrap();

    assert_eq!(reloaded.status, BookingStatus::Cancelled);
    let sent = backend.sent();
    assert!(sent[0].url.ends_with("/api/bookings/5/cancel/"));
    assert!(sent[1].url.ends_with("/api/bookings/5/"));
}

#[test]
fn booking_url_points_at_details_page() {
    let backend = Arc::new(FakeBackend::default());
    let api = api_over(&backend);
    assert_eq!(
        api.booking_url(12),
        "http://127.0.0.1:8000/booking-details/?id=12"
    );
}

#[test]
fn config_round_trips_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.general.theme_mode = ThemeMode::Dark;
    saved.api.base_url = "https://bookings.example.com".into();
    saved.api.notify_on_failure = false;
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, saved);
}

#[test]
fn broken_settings_file_loads_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[api\nbase_url = ").unwrap();

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}
