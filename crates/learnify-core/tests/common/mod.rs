#![allow(dead_code)]

use learnify_core::{Session, SessionBuilder};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// A three-day course: day 1 is complete, day 2 is half done, day 3 untouched.
pub fn course_json(id: &str) -> Value {
    json!({
        "id": id,
        "userId": "u1",
        "name": "Rust Basics",
        "numberOfDays": 3,
        "startDate": "2024-03-01T00:00:00.000Z",
        "preferredLearningStyle": ["visual"],
        "studyPlan": [
            { "day": "Day 1", "tasks": [
                { "title": "Install", "description": "Install rustup",
                  "resourceUrls": ["https://rustup.rs"], "status": "completed" }
            ] },
            { "day": "Day 2", "tasks": [
                { "title": "Ownership", "description": "Chapter 4",
                  "resourceUrls": [], "status": "completed" },
                { "title": "Borrowing", "description": "Chapter 4.2",
                  "resourceUrls": [], "status": "pending" }
            ] },
            { "day": "Day 3", "tasks": [
                { "title": "Structs", "description": "Chapter 5",
                  "resourceUrls": [], "status": "pending" }
            ] }
        ]
    })
}

/// Starts a mock API and a session pointing at it, logged in with [`TOKEN`].
pub async fn mock_session() -> (TempDir, MockServer, Session) {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let session = SessionBuilder::new()
        .with_store_path(Some(temp_dir.path().join("session.db")))
        .with_api_url(Some(format!("{}/api", server.uri())))
        .with_token(Some(TOKEN))
        .build()
        .await
        .expect("Failed to create session");
    (temp_dir, server, session)
}
