// tests/api_tests.rs
//
// End-to-end HTTP tests against a live Postgres. They spawn the app on a
// random port and drive it with reqwest. When DATABASE_URL is not set the
// tests skip themselves so the suite stays runnable without infrastructure.

use nextstep_backend::{config::Config, routes, state::AppState};
use sqlx::postgres::PgPoolOptions;

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL, or None when DATABASE_URL is not configured.
async fn spawn_app() -> Option<String> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("skipping: DATABASE_URL not set");
        return None;
    };

    // 1. Create a pool
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing");

    // 2. Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    // 3. Create test configuration and state
    let config = Config {
        database_url: database_url.clone(),
        jwt_secret: "test_secret_for_integration_tests".to_string(),
        jwt_expiration: 600, // 10 minutes for tests
        rust_log: "error".to_string(),
    };

    let state = AppState { pool, config };

    // 4. Create the router with the app state
    let app = routes::create_router(state);

    // 5. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // 6. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Some(address)
}

fn unique_email(prefix: &str) -> String {
    format!(
        "{}_{}@example.com",
        prefix,
        &uuid::Uuid::new_v4().to_string()[..8]
    )
}

/// Register a user and return (token, user_id).
async fn register_and_login(
    client: &reqwest::Client,
    address: &str,
    role: &str,
) -> (String, i64) {
    let email = unique_email(role);
    let password = "password123";

    let response = client
        .post(format!("{}/api/auth/register", address))
        .json(&serde_json::json!({
            "name": format!("Test {}", role),
            "email": email,
            "password": password,
            "role": role,
        }))
        .send()
        .await
        .expect("Register failed");
    assert_eq!(response.status().as_u16(), 201);

    let login: serde_json::Value = client
        .post(format!("{}/api/auth/login", address))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Login failed")
        .json()
        .await
        .expect("Failed to parse login json");

    let token = login["data"]["token"].as_str().expect("token").to_string();
    let user_id = login["data"]["user"]["id"].as_i64().expect("user id");
    (token, user_id)
}

async fn create_job(client: &reqwest::Client, address: &str, token: &str) -> i64 {
    let response = client
        .post(format!("{}/api/jobs", address))
        .bearer_auth(token)
        .json(&serde_json::json!({
            "title": "Junior Backend Engineer",
            "company": "Acme Corp",
            "location": "Berlin, Germany",
            "employment_type": "full-time",
            "description": "Build and maintain HTTP services in a small team. \
                            You will own features end to end.",
            "required_skills": ["Rust", "SQL"],
            "is_remote": true,
        }))
        .send()
        .await
        .expect("Create job failed");
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    body["data"]["id"].as_i64().expect("job id")
}

async fn create_mentor_profile(
    client: &reqwest::Client,
    address: &str,
    token: &str,
    expertise: &[&str],
) -> i64 {
    let response = client
        .post(format!("{}/api/mentors", address))
        .bearer_auth(token)
        .json(&serde_json::json!({
            "role": "Staff Engineer",
            "company": "Acme Corp",
            "location": "Berlin, Germany",
            "expertise": expertise,
            "experience": "10 years",
            "bio": "Happy to help juniors grow.",
            "availability": "weekends",
        }))
        .send()
        .await
        .expect("Create mentor failed");
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    body["data"]["id"].as_i64().expect("mentor id")
}

async fn job_applicants(client: &reqwest::Client, address: &str, job_id: i64) -> i64 {
    let body: serde_json::Value = client
        .get(format!("{}/api/jobs/{}", address, job_id))
        .send()
        .await
        .expect("Get job failed")
        .json()
        .await
        .unwrap();
    body["data"]["job"]["applicants"].as_i64().expect("applicants")
}

#[tokio::test]
async fn register_login_and_fetch_current_user() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (token, user_id) = register_and_login(&client, &address, "student").await;

    let me: serde_json::Value = client
        .get(format!("{}/api/auth/user", address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Get current user failed")
        .json()
        .await
        .unwrap();

    assert_eq!(me["success"], true);
    assert_eq!(me["data"]["id"].as_i64(), Some(user_id));
    assert_eq!(me["data"]["role"], "student");
    // Password hash must never be serialized.
    assert!(me["data"].get("password").is_none());
}

#[tokio::test]
async fn duplicate_application_conflicts_and_counter_stays_put() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (employer_token, _) = register_and_login(&client, &address, "employer").await;
    let job_id = create_job(&client, &address, &employer_token).await;

    let (student_token, _) = register_and_login(&client, &address, "student").await;

    // First application succeeds and bumps the counter.
    let first = client
        .post(format!("{}/api/jobs/apply", address))
        .bearer_auth(&student_token)
        .json(&serde_json::json!({ "job_id": job_id, "cover_letter": "Hi!" }))
        .send()
        .await
        .expect("Apply failed");
    assert_eq!(first.status().as_u16(), 201);
    assert_eq!(job_applicants(&client, &address, job_id).await, 1);

    // Second application for the same (job, user) pair must conflict
    // without touching the counter.
    let second = client
        .post(format!("{}/api/jobs/apply", address))
        .bearer_auth(&student_token)
        .json(&serde_json::json!({ "job_id": job_id }))
        .send()
        .await
        .expect("Second apply failed");
    assert_eq!(second.status().as_u16(), 409);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["error"]["code"], "ALREADY_APPLIED");
    assert_eq!(job_applicants(&client, &address, job_id).await, 1);
}

#[tokio::test]
async fn withdrawing_application_decrements_counter_once() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (employer_token, _) = register_and_login(&client, &address, "employer").await;
    let job_id = create_job(&client, &address, &employer_token).await;
    let (student_token, _) = register_and_login(&client, &address, "student").await;

    let apply: serde_json::Value = client
        .post(format!("{}/api/jobs/apply", address))
        .bearer_auth(&student_token)
        .json(&serde_json::json!({ "job_id": job_id }))
        .send()
        .await
        .expect("Apply failed")
        .json()
        .await
        .unwrap();
    let application_id = apply["data"]["id"].as_i64().expect("application id");
    assert_eq!(job_applicants(&client, &address, job_id).await, 1);

    let delete = client
        .delete(format!("{}/api/applications/{}", address, application_id))
        .bearer_auth(&student_token)
        .send()
        .await
        .expect("Delete failed");
    assert_eq!(delete.status().as_u16(), 204);
    assert_eq!(job_applicants(&client, &address, job_id).await, 0);

    // Deleting again is a 404 and the counter never goes below zero.
    let again = client
        .delete(format!("{}/api/applications/{}", address, application_id))
        .bearer_auth(&student_token)
        .send()
        .await
        .expect("Second delete failed");
    assert_eq!(again.status().as_u16(), 404);
    assert_eq!(job_applicants(&client, &address, job_id).await, 0);
}

#[tokio::test]
async fn application_status_is_poster_only() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (employer_token, _) = register_and_login(&client, &address, "employer").await;
    let job_id = create_job(&client, &address, &employer_token).await;
    let (student_token, _) = register_and_login(&client, &address, "student").await;

    let apply: serde_json::Value = client
        .post(format!("{}/api/jobs/apply", address))
        .bearer_auth(&student_token)
        .json(&serde_json::json!({ "job_id": job_id }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let application_id = apply["data"]["id"].as_i64().unwrap();

    // Applicant may not change status.
    let forbidden = client
        .patch(format!("{}/api/applications/{}", address, application_id))
        .bearer_auth(&student_token)
        .json(&serde_json::json!({ "status": "reviewing" }))
        .send()
        .await
        .unwrap();
    assert_eq!(forbidden.status().as_u16(), 403);

    // Poster may.
    let ok = client
        .patch(format!("{}/api/applications/{}", address, application_id))
        .bearer_auth(&employer_token)
        .json(&serde_json::json!({ "status": "reviewing" }))
        .send()
        .await
        .unwrap();
    assert_eq!(ok.status().as_u16(), 200);
    let body: serde_json::Value = ok.json().await.unwrap();
    assert_eq!(body["data"]["status"], "reviewing");
}

#[tokio::test]
async fn job_list_filters_by_type_and_skills() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (employer_token, _) = register_and_login(&client, &address, "employer").await;
    let marker = uuid::Uuid::new_v4().to_string()[..8].to_string();

    for (employment_type, skill) in [("internship", "React"), ("full-time", "Go")] {
        let response = client
            .post(format!("{}/api/jobs", address))
            .bearer_auth(&employer_token)
            .json(&serde_json::json!({
                "title": format!("Role {}", marker),
                "company": "Acme Corp",
                "location": "Remote",
                "employment_type": employment_type,
                "description": "A role description that is certainly long enough \
                                to pass validation checks.",
                "required_skills": [skill],
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 201);
    }

    let body: serde_json::Value = client
        .get(format!(
            "{}/api/jobs?type=internship&q={}",
            address, marker
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["employment_type"], "internship");

    // Case-insensitive skill intersection.
    let body: serde_json::Value = client
        .get(format!(
            "{}/api/jobs?skills=react,sql&q={}",
            address, marker
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["required_skills"][0], "React");
}

#[tokio::test]
async fn profile_update_recomputes_completion() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (token, _) = register_and_login(&client, &address, "student").await;

    // The stored score starts at 0; it is only computed on profile updates.
    let me: serde_json::Value = client
        .get(format!("{}/api/profile", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(me["data"]["profile_completion"].as_i64(), Some(0));

    let updated: serde_json::Value = client
        .patch(format!("{}/api/profile", address))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "bio": "Final-year CS student",
            "location": "Berlin",
            "age": 24,
            "skills": ["Rust"],
            "interests": ["Systems"],
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // 7 of 13 tracked fields -> 54.
    assert_eq!(updated["data"]["profile_completion"].as_i64(), Some(54));
}

#[tokio::test]
async fn onboarding_roundtrip() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (token, _) = register_and_login(&client, &address, "student").await;

    let check: serde_json::Value = client
        .get(format!("{}/api/onboarding/check", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(check["data"]["completed"], false);

    let update = client
        .patch(format!("{}/api/profile/onboarding", address))
        .bearer_auth(&token)
        .json(&serde_json::json!({ "step": 3, "completed": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(update.status().as_u16(), 200);

    let check: serde_json::Value = client
        .get(format!("{}/api/onboarding/check", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(check["data"]["completed"], true);
    assert_eq!(check["data"]["step"].as_i64(), Some(3));
}

#[tokio::test]
async fn messaging_conversation_and_read_receipts() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (alice_token, alice_id) = register_and_login(&client, &address, "student").await;
    let (bob_token, bob_id) = register_and_login(&client, &address, "mentor").await;

    let sent: serde_json::Value = client
        .post(format!("{}/api/messages", address))
        .bearer_auth(&alice_token)
        .json(&serde_json::json!({ "receiver_id": bob_id, "content": "Hello Bob" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let message_id = sent["data"]["id"].as_i64().unwrap();

    // Sender cannot mark their own message read.
    let not_receiver = client
        .patch(format!("{}/api/messages/{}", address, message_id))
        .bearer_auth(&alice_token)
        .send()
        .await
        .unwrap();
    assert_eq!(not_receiver.status().as_u16(), 403);

    let marked = client
        .patch(format!("{}/api/messages/{}", address, message_id))
        .bearer_auth(&bob_token)
        .send()
        .await
        .unwrap();
    assert_eq!(marked.status().as_u16(), 200);

    let conversation: serde_json::Value = client
        .get(format!(
            "{}/api/messages/conversation/{}",
            address, alice_id
        ))
        .bearer_auth(&bob_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let messages = conversation["data"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["read"], true);
    assert_eq!(messages[0]["content"], "Hello Bob");
}

#[tokio::test]
async fn becoming_a_mentor_is_once_per_user() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (token, _) = register_and_login(&client, &address, "mentor").await;
    let mentor_id = create_mentor_profile(&client, &address, &token, &["Rust"]).await;

    // A second profile for the same user conflicts.
    let second = client
        .post(format!("{}/api/mentors", address))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "role": "Principal Engineer",
            "company": "Acme Corp",
            "location": "Berlin, Germany",
            "expertise": ["Rust"],
            "experience": "12 years",
            "bio": "Second profile.",
            "availability": "evenings",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status().as_u16(), 409);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["error"]["code"], "CONFLICT");

    // The owner may update their profile; anyone else may not.
    let updated: serde_json::Value = client
        .patch(format!("{}/api/mentors/{}", address, mentor_id))
        .bearer_auth(&token)
        .json(&serde_json::json!({ "company": "Initech" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["data"]["company"], "Initech");
    assert_eq!(updated["data"]["role"], "Staff Engineer");

    let (other_token, _) = register_and_login(&client, &address, "mentor").await;
    let forbidden = client
        .patch(format!("{}/api/mentors/{}", address, mentor_id))
        .bearer_auth(&other_token)
        .json(&serde_json::json!({ "company": "Hostile Takeover Inc" }))
        .send()
        .await
        .unwrap();
    assert_eq!(forbidden.status().as_u16(), 403);
}

#[tokio::test]
async fn mentor_expertise_filter_matches_union() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let marker = uuid::Uuid::new_v4().to_string()[..8].to_string();
    let design_tag = format!("design-{}", marker);
    let data_tag = format!("data-{}", marker);
    let go_tag = format!("go-{}", marker);

    let mut ids = Vec::new();
    for tag in [&design_tag, &data_tag, &go_tag] {
        let (token, _) = register_and_login(&client, &address, "mentor").await;
        ids.push(create_mentor_profile(&client, &address, &token, &[tag]).await);
    }

    // The expertise filter is a union over the comma-separated tags.
    let body: serde_json::Value = client
        .get(format!(
            "{}/api/mentors?expertise={},{}",
            address, design_tag, data_tag
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&ids[0]));
    assert!(listed.contains(&ids[1]));
    assert!(!listed.contains(&ids[2]));
    assert_eq!(body["meta"]["total"].as_i64(), Some(2));

    // A single tag narrows to one mentor; matching is case-insensitive.
    let body: serde_json::Value = client
        .get(format!(
            "{}/api/mentors?expertise={}",
            address,
            design_tag.to_uppercase()
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"].as_i64(), Some(ids[0]));
}

#[tokio::test]
async fn session_lifecycle_and_connection_request() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (mentor_token, _) = register_and_login(&client, &address, "mentor").await;
    let mentor_id = create_mentor_profile(&client, &address, &mentor_token, &["Rust"]).await;
    let (student_token, _) = register_and_login(&client, &address, "student").await;

    // Connection request lands in the mentor's inbox as a direct message.
    let connect = client
        .post(format!("{}/api/mentors/{}/connect", address, mentor_id))
        .bearer_auth(&student_token)
        .json(&serde_json::json!({ "message": "Could you mentor me in Rust?" }))
        .send()
        .await
        .unwrap();
    assert_eq!(connect.status().as_u16(), 201);

    let inbox: serde_json::Value = client
        .get(format!("{}/api/messages", address))
        .bearer_auth(&mentor_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        inbox["data"][0]["content"],
        "Could you mentor me in Rust?"
    );

    let booked: serde_json::Value = client
        .post(format!("{}/api/mentors/book", address))
        .bearer_auth(&student_token)
        .json(&serde_json::json!({
            "mentor_id": mentor_id,
            "topic": "Ownership and borrowing",
            "scheduled_date": "2030-01-15T10:00:00Z",
            "duration": 60,
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let session_id = booked["data"]["id"].as_i64().unwrap();
    assert_eq!(booked["data"]["status"], "scheduled");

    // Unknown status values are rejected.
    let bad = client
        .patch(format!("{}/api/mentors/sessions/{}", address, session_id))
        .bearer_auth(&mentor_token)
        .json(&serde_json::json!({ "status": "postponed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status().as_u16(), 400);
    let body: serde_json::Value = bad.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    // Either participant can complete or cancel.
    let completed: serde_json::Value = client
        .patch(format!("{}/api/mentors/sessions/{}", address, session_id))
        .bearer_auth(&mentor_token)
        .json(&serde_json::json!({ "status": "completed" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(completed["data"]["status"], "completed");

    // Outsiders cannot.
    let (outsider_token, _) = register_and_login(&client, &address, "student").await;
    let forbidden = client
        .patch(format!("{}/api/mentors/sessions/{}", address, session_id))
        .bearer_auth(&outsider_token)
        .json(&serde_json::json!({ "status": "cancelled" }))
        .send()
        .await
        .unwrap();
    assert_eq!(forbidden.status().as_u16(), 403);
}

#[tokio::test]
async fn opportunity_apply_is_unique_per_user() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (employer_token, _) = register_and_login(&client, &address, "employer").await;
    let created: serde_json::Value = client
        .post(format!("{}/api/opportunities", address))
        .bearer_auth(&employer_token)
        .json(&serde_json::json!({
            "title": "Summer Internship",
            "type": "internship",
            "description": "Three month internship.",
            "location": "Remote",
            "is_remote": true,
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let opportunity_id = created["data"]["id"].as_i64().unwrap();

    let (student_token, _) = register_and_login(&client, &address, "student").await;

    let first = client
        .post(format!("{}/api/opportunities/apply", address))
        .bearer_auth(&student_token)
        .json(&serde_json::json!({ "opportunity_id": opportunity_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status().as_u16(), 201);

    let second = client
        .post(format!("{}/api/opportunities/apply", address))
        .bearer_auth(&student_token)
        .json(&serde_json::json!({ "opportunity_id": opportunity_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status().as_u16(), 409);
}

#[tokio::test]
async fn opportunity_application_review_is_poster_only() {
    let Some(address) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let (employer_token, _) = register_and_login(&client, &address, "employer").await;
    let created: serde_json::Value = client
        .post(format!("{}/api/opportunities", address))
        .bearer_auth(&employer_token)
        .json(&serde_json::json!({
            "title": "Research Assistant",
            "type": "job",
            "description": "Part-time research role.",
            "location": "Remote",
            "is_remote": true,
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let opportunity_id = created["data"]["id"].as_i64().unwrap();

    let (student_token, _) = register_and_login(&client, &address, "student").await;
    let applied: serde_json::Value = client
        .post(format!("{}/api/opportunities/apply", address))
        .bearer_auth(&student_token)
        .json(&serde_json::json!({ "opportunity_id": opportunity_id }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let application_id = applied["data"]["id"].as_i64().unwrap();

    // The applicant cannot review their own application.
    let forbidden = client
        .patch(format!(
            "{}/api/opportunities/applications/{}",
            address, application_id
        ))
        .bearer_auth(&student_token)
        .json(&serde_json::json!({ "status": "accepted" }))
        .send()
        .await
        .unwrap();
    assert_eq!(forbidden.status().as_u16(), 403);

    // Unknown status values are rejected.
    let bad = client
        .patch(format!(
            "{}/api/opportunities/applications/{}",
            address, application_id
        ))
        .bearer_auth(&employer_token)
        .json(&serde_json::json!({ "status": "maybe" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status().as_u16(), 400);

    let accepted: serde_json::Value = client
        .patch(format!(
            "{}/api/opportunities/applications/{}",
            address, application_id
        ))
        .bearer_auth(&employer_token)
        .json(&serde_json::json!({ "status": "accepted" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(accepted["data"]["status"], "accepted");
}
