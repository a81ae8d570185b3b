//! Integration tests for the AutoIMS HTTP client against an in-process mock
//! of the backend.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};

use autoims_client::{
    ClientConfig, ClientError, FileTokenStore, LoginRequest, Session, SignupRequest, TokenStore,
};
use shared::models::{RequestStatus, ServiceRequestUpdate};

const GOOD_TOKEN: &str = "good-token";

#[derive(Debug, Clone)]
struct RecordedCall {
    method: String,
    path: String,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct MockState {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockState {
    fn record(&self, method: &str, path: impl Into<String>, body: Option<Value>) {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            path: path.into(),
            body,
        });
    }

    fn bodies(&self, method: &str, path: &str) -> Vec<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .filter_map(|call| call.body.clone())
            .collect()
    }

    fn count(&self, method: &str, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .count()
    }
}

fn check_auth(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {GOOD_TOKEN}");
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);
    if authorized {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Token is invalid!"})),
        )
            .into_response())
    }
}

fn employee_json(id: i64) -> Value {
    json!({
        "id": id,
        "name": "Jane",
        "position": "Mechanic",
        "phone": "555",
        "email": "j@x.com",
        "working_status": "Working",
        "rating": 4.5,
        "jobs_done": 3,
        "salary": 52000.0
    })
}

fn inventory_item_json(id: i64, image_url: Option<&str>) -> Value {
    json!({
        "id": id,
        "code": "BRK-01",
        "name": "Brake Pads",
        "brand": "BrakeMaster",
        "unit_price": 3500.0,
        "quantity_in_stock": 3,
        "quantity_label": "sets",
        "description": null,
        "image_url": image_url,
        "reorder_level": 5
    })
}

fn service_request_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "customer": {"name": "Ana", "phone": "777", "email": "a@x.com", "address": "Main St"},
        "vehicle": {"plate_no": "KA-01", "brand": "Toyota", "model": "Corolla", "year": 2018, "color": "red"},
        "service_type": "Brake Service",
        "problem_note": "squeaks",
        "priority": "Normal",
        "status": status,
        "assigned_employee_id": null,
        "labor_charge": null,
        "request_date": null
    })
}

fn bill_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "job_id": 40,
        "customer_name": "Ana",
        "plate_no": "KA-01",
        "parts": [{"part_id": 1, "name": "Brake Pads", "quantity": 2, "unit_price": 3500.0}],
        "parts_subtotal": 7000.0,
        "labor_subtotal": 500.0,
        "tax": 750.0,
        "total": 8250.0,
        "payment_status": status,
        "bill_date": null
    })
}

async fn login(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.record("POST", "/api/login", Some(body.clone()));
    if body["username"] == "admin" && body["password"] == "secret" {
        Json(json!({"token": GOOD_TOKEN})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
            .into_response()
    }
}

async fn signup(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.record("POST", "/api/signup", Some(body.clone()));
    if body["username"] == "taken" {
        (
            StatusCode::CONFLICT,
            Json(json!({"error": "Username already exists"})),
        )
            .into_response()
    } else {
        Json(json!({"token": GOOD_TOKEN})).into_response()
    }
}

async fn low_stock(State(state): State<MockState>, headers: HeaderMap) -> Response {
    state.record("GET", "/api/inventory/low-stock", None);
    if let Err(response) = check_auth(&headers) {
        return response;
    }
    Json(json!([inventory_item_json(1, None)])).into_response()
}

async fn list_employees(State(state): State<MockState>, headers: HeaderMap) -> Response {
    state.record("GET", "/api/employees", None);
    if let Err(response) = check_auth(&headers) {
        return response;
    }
    Json(json!([employee_json(7)])).into_response()
}

async fn create_employee(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record("POST", "/api/employees", Some(body.clone()));
    if let Err(response) = check_auth(&headers) {
        return response;
    }
    if body["name"].as_str().unwrap_or_default().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "name is required"})),
        )
            .into_response();
    }
    let mut created = employee_json(101);
    created["name"] = body["name"].clone();
    Json(created).into_response()
}

async fn delete_employee(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    state.record("DELETE", format!("/api/employees/{id}"), None);
    if let Err(response) = check_auth(&headers) {
        return response;
    }
    if id == 7 {
        Json(json!({"message": "Employee deleted"})).into_response()
    } else {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "Employee is assigned to an active job"})),
        )
            .into_response()
    }
}

async fn update_service_request(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record("PUT", format!("/api/service-requests/{id}"), Some(body.clone()));
    if let Err(response) = check_auth(&headers) {
        return response;
    }
    let status = body["status"].as_str().unwrap_or("Pending").to_string();
    Json(service_request_json(id, &status)).into_response()
}

async fn pay_bill(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    state.record("PUT", format!("/api/billing/{id}/pay"), None);
    if let Err(response) = check_auth(&headers) {
        return response;
    }
    Json(bill_json(id, "Paid")).into_response()
}

async fn upload_image(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if let Err(response) = check_auth(&headers) {
        return response;
    }
    let mut filename = String::new();
    let mut bytes_len = 0;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("image") {
            filename = field.file_name().unwrap_or_default().to_string();
            bytes_len = field.bytes().await.map(|bytes| bytes.len()).unwrap_or(0);
        }
    }
    state.record(
        "POST",
        format!("/api/inventory/{id}/image"),
        Some(json!({"filename": filename, "len": bytes_len})),
    );
    Json(inventory_item_json(id, Some("/static/brk-01.png"))).into_response()
}

async fn spawn_backend(state: MockState) -> String {
    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/signup", post(signup))
        .route("/api/inventory/low-stock", get(low_stock))
        .route("/api/employees", get(list_employees).post(create_employee))
        .route("/api/employees/{id}", delete(delete_employee))
        .route("/api/service-requests/{id}", put(update_service_request))
        .route("/api/billing/{id}/pay", put(pay_bill))
        .route("/api/inventory/{id}/image", post(upload_image))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn login_issues_token() {
    let state = MockState::default();
    let base_url = spawn_backend(state.clone()).await;
    let client = ClientConfig::new(&base_url).build_http_client();

    let issued = client
        .login(&LoginRequest {
            username: "admin".into(),
            password: "secret".into(),
        })
        .await
        .expect("login");
    assert_eq!(issued.token, GOOD_TOKEN);

    let rejected = client
        .login(&LoginRequest {
            username: "admin".into(),
            password: "wrong".into(),
        })
        .await;
    assert!(matches!(rejected, Err(ClientError::Unauthorized)));
}

#[tokio::test]
async fn signup_issues_token_and_surfaces_conflicts() {
    let state = MockState::default();
    let base_url = spawn_backend(state.clone()).await;
    let client = ClientConfig::new(&base_url).build_http_client();

    let request = SignupRequest {
        name: "Jane".into(),
        username: "jane".into(),
        email: "j@x.com".into(),
        password: "secret".into(),
    };
    let issued = client.signup(&request).await.expect("signup");
    assert_eq!(issued.token, GOOD_TOKEN);

    let mut taken = request.clone();
    taken.username = "taken".into();
    match client.signup(&taken).await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message, "Username already exists");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn low_stock_listing_is_a_distinct_fetch() {
    let state = MockState::default();
    let base_url = spawn_backend(state.clone()).await;
    let client = ClientConfig::new(&base_url)
        .with_token(GOOD_TOKEN)
        .build_http_client();

    let items = client.low_stock_inventory().await.expect("low stock");
    assert_eq!(items.len(), 1);
    assert!(items[0].quantity_in_stock <= items[0].reorder_level);
    assert_eq!(state.count("GET", "/api/inventory/low-stock"), 1);
}

#[tokio::test]
async fn bearer_token_reaches_protected_endpoints() {
    let state = MockState::default();
    let base_url = spawn_backend(state.clone()).await;

    let client = ClientConfig::new(&base_url)
        .with_token(GOOD_TOKEN)
        .build_http_client();
    let employees = client.list_employees(false).await.expect("list employees");
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, 7);

    // a missing token surfaces as Unauthorized, not a generic error
    let anonymous = ClientConfig::new(&base_url).build_http_client();
    let result = anonymous.list_employees(false).await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));
}

#[tokio::test]
async fn backend_error_message_is_surfaced_verbatim() {
    let state = MockState::default();
    let base_url = spawn_backend(state.clone()).await;
    let client = ClientConfig::new(&base_url)
        .with_token(GOOD_TOKEN)
        .build_http_client();

    let result = client.delete_employee(8).await;
    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "Employee is assigned to an active job");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn update_strips_labor_charge_outside_completion() {
    let state = MockState::default();
    let base_url = spawn_backend(state.clone()).await;
    let client = ClientConfig::new(&base_url)
        .with_token(GOOD_TOKEN)
        .build_http_client();

    // completion carries the labor charge
    let update = ServiceRequestUpdate::completed(rust_decimal::Decimal::new(500, 0));
    client
        .update_service_request(1, &update)
        .await
        .expect("complete request");

    // a different transition never does, even if set by mistake
    let update = ServiceRequestUpdate {
        status: Some(RequestStatus::InProgress),
        labor_charge: Some(rust_decimal::Decimal::new(500, 0)),
        ..Default::default()
    };
    client
        .update_service_request(1, &update)
        .await
        .expect("update request");

    let bodies = state.bodies("PUT", "/api/service-requests/1");
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["status"], "Completed");
    assert_eq!(bodies[0]["labor_charge"], json!(500.0));
    assert_eq!(bodies[1]["status"], "In Progress");
    assert!(bodies[1].get("labor_charge").is_none());
}

#[tokio::test]
async fn mark_paid_returns_canonical_bill() {
    let state = MockState::default();
    let base_url = spawn_backend(state.clone()).await;
    let client = ClientConfig::new(&base_url)
        .with_token(GOOD_TOKEN)
        .build_http_client();

    let bill = client.mark_bill_paid(12).await.expect("mark paid");
    assert_eq!(bill.id, 12);
    assert_eq!(bill.payment_status, shared::models::PaymentStatus::Paid);
    assert_eq!(state.count("PUT", "/api/billing/12/pay"), 1);
}

#[tokio::test]
async fn image_upload_is_multipart() {
    let state = MockState::default();
    let base_url = spawn_backend(state.clone()).await;
    let client = ClientConfig::new(&base_url)
        .with_token(GOOD_TOKEN)
        .build_http_client();

    let item = client
        .upload_inventory_image(1, "brake.png", vec![0u8; 64])
        .await
        .expect("upload image");
    assert_eq!(item.image_url.as_deref(), Some("/static/brk-01.png"));

    let bodies = state.bodies("POST", "/api/inventory/1/image");
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["filename"], "brake.png");
    assert_eq!(bodies[0]["len"], 64);
}

#[tokio::test]
async fn file_token_store_round_trip() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let store = FileTokenStore::new(dir.path());

    assert!(store.load().is_none());
    store.save("persisted-token").expect("save token");
    assert_eq!(store.load().as_deref(), Some("persisted-token"));

    // a second store over the same directory sees the same session
    let reopened = FileTokenStore::new(dir.path());
    assert_eq!(reopened.load().as_deref(), Some("persisted-token"));

    store.clear().expect("clear token");
    assert!(store.load().is_none());
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn session_reuses_persisted_token() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let session = Session::new(FileTokenStore::new(dir.path()));
    session.set_token("opaque-token").expect("persist");

    let session = Session::new(FileTokenStore::new(dir.path()));
    assert_eq!(session.valid_token().as_deref(), Some("opaque-token"));
    session.clear().expect("clear");
    assert!(session.token().is_none());
}
