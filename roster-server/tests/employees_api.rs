// roster-server/tests/employees_api.rs
// End-to-end tests: mock upstream + facade, driven over real HTTP

use std::sync::Arc;

use roster_server::{Config, ServerState, api};
use roster_upstream_mock::{EmployeeStore, MockState, Throttle, ThrottleConfig, router};
use shared::error::{ErrorBody, param};
use shared::models::{Employee, EmployeeCreate};

/// Start a mock upstream on an ephemeral port; returns its employee base URL
async fn spawn_mock(seed_count: usize, throttle: ThrottleConfig) -> String {
    let state = MockState {
        store: EmployeeStore::seeded(seed_count),
        throttle: Arc::new(Throttle::new(throttle)),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    format!("http://{addr}/api/v1/employee")
}

/// Start the facade against the given upstream; returns its root URL
async fn spawn_facade(upstream_url: &str) -> String {
    let config = Config::with_overrides(0, upstream_url);
    let state = ServerState::initialize(&config);
    let app = api::build_app().with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Empty upstream plus facade, ready for a test to populate
async fn spawn_stack() -> (reqwest::Client, String) {
    let upstream = spawn_mock(0, ThrottleConfig::default()).await;
    let facade = spawn_facade(&upstream).await;
    (reqwest::Client::new(), facade)
}

fn input(name: &str, salary: i32, title: &str, age: i32) -> EmployeeCreate {
    EmployeeCreate {
        name: name.to_string(),
        salary,
        title: title.to_string(),
        age,
    }
}

async fn create_employee(client: &reqwest::Client, base: &str, input: &EmployeeCreate) -> Employee {
    let response = client
        .post(format!("{base}/api/v1/employees"))
        .json(input)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    response.json().await.unwrap()
}

#[tokio::test]
async fn test_create_then_fetch_roundtrip() {
    let (client, base) = spawn_stack().await;

    // 1. Create through the facade; upstream assigns id and email
    let created =
        create_employee(&client, &base, &input("Shivani Singh", 50000, "Engineer", 30)).await;
    assert_eq!(created.name, "Shivani Singh");
    assert_eq!(created.email, "shivani.singh@company.com");

    // 2. Fetch it back by id
    let fetched: Employee = client
        .get(format!("{base}/api/v1/employees/{}", created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    // 3. The facade surfaces the upstream wire field names unchanged
    let raw: serde_json::Value = client
        .get(format!("{base}/api/v1/employees"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed = raw.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].get("employee_name").is_some());
    assert!(listed[0].get("name").is_none());
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_misses_are_404() {
    let (client, base) = spawn_stack().await;
    create_employee(&client, &base, &input("Shivani Singh", 50000, "Engineer", 30)).await;
    create_employee(&client, &base, &input("Aniksha Singh", 60000, "Manager", 28)).await;

    let matches: Vec<Employee> = client
        .get(format!("{base}/api/v1/employees/search/singh"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].name, "Shivani Singh");
    assert_eq!(matches[1].name, "Aniksha Singh");

    let response = client
        .get(format!("{base}/api/v1/employees/search/raj"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body: ErrorBody = response.json().await.unwrap();
    assert!(body.message.contains("raj"), "message was {:?}", body.message);
    assert_eq!(body.param.as_deref(), Some(param::NAME));
}

#[tokio::test]
async fn test_salary_aggregations() {
    let (client, base) = spawn_stack().await;
    create_employee(&client, &base, &input("Shivani Singh", 50000, "Engineer", 30)).await;
    create_employee(&client, &base, &input("Aniksha Singh", 60000, "Manager", 28)).await;

    let highest: i32 = client
        .get(format!("{base}/api/v1/employees/highest-salary"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(highest, 60000);

    let top: Vec<String> = client
        .get(format!("{base}/api/v1/employees/top-earners"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(top, vec!["Aniksha Singh", "Shivani Singh"]);
}

#[tokio::test]
async fn test_empty_roster_aggregations() {
    let (client, base) = spawn_stack().await;

    // No maximum over an empty roster
    let response = client
        .get(format!("{base}/api/v1/employees/highest-salary"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    // Top earners over an empty roster is an empty list, not an error
    let response = client
        .get(format!("{base}/api/v1/employees/top-earners"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let top: Vec<String> = response.json().await.unwrap();
    assert!(top.is_empty());
}

#[tokio::test]
async fn test_delete_by_id_returns_name_and_removes() {
    let (client, base) = spawn_stack().await;
    let created =
        create_employee(&client, &base, &input("Shivani Singh", 50000, "Engineer", 30)).await;

    // 1. Delete answers with the deleted employee's name
    let response = client
        .delete(format!("{base}/api/v1/employees/{}", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let name: String = response.json().await.unwrap();
    assert_eq!(name, "Shivani Singh");

    // 2. The record is gone
    let response = client
        .get(format!("{base}/api/v1/employees/{}", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.param.as_deref(), Some(param::ID));

    // 3. Deleting it again fails on the resolve step
    let response = client
        .delete(format!("{base}/api/v1/employees/{}", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_upstream() {
    let (client, base) = spawn_stack().await;

    let response = client
        .post(format!("{base}/api/v1/employees"))
        .json(&input("", -5, "", 10))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json().await.unwrap();
    let fields = body.fields.unwrap();
    for field in ["name", "salary", "title", "age"] {
        assert!(fields.contains_key(field), "missing violation for {field}");
    }

    // The upstream store was never touched
    let listed: Vec<Employee> = client
        .get(format!("{base}/api/v1/employees"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_upstream_rate_limit_surfaces_as_429() {
    let upstream = spawn_mock(
        5,
        ThrottleConfig {
            probability: 1.0,
            window: std::time::Duration::from_secs(60),
        },
    )
    .await;
    let base = spawn_facade(&upstream).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/api/v1/employees"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::TOO_MANY_REQUESTS);

    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(
        body.message,
        "Unusual traffic has been detected, please try again later"
    );
}

#[tokio::test]
async fn test_health_reports_upstream() {
    let upstream = spawn_mock(0, ThrottleConfig::default()).await;
    let base = spawn_facade(&upstream).await;
    let client = reqwest::Client::new();

    let health: serde_json::Value = client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(health["status"], "healthy");
    assert_eq!(health["upstream_url"], upstream.as_str());
}
