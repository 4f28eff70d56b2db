//! Tests for the wire format of the models.

use serde_json::{json, Value};

use super::*;

fn plan_json() -> Value {
    json!({
        "id": "c1",
        "userId": "u1",
        "name": "Rust Basics",
        "numberOfDays": 2,
        "startDate": "2024-03-01T00:00:00.000Z",
        "preferredLearningStyle": ["visual", "kinesthetic"],
        "studyPlan": [
            {
                "day": "Day 1",
                "tasks": [
                    {
                        "title": "Install",
                        "description": "Install rustup",
                        "resourceUrls": ["https://rustup.rs"],
                        "status": "completed"
                    },
                    {
                        "title": "Hello",
                        "description": "Write hello world",
                        "resourceUrls": [],
                        "status": "pending"
                    }
                ]
            },
            {
                "day": "Day 2",
                "tasks": [
                    { "title": "Ownership", "description": "Chapter 4" }
                ]
            }
        ]
    })
}

#[test]
fn test_plan_deserializes_camel_case() {
    let plan: CoursePlan = serde_json::from_value(plan_json()).expect("valid plan");

    assert_eq!(plan.id, "c1");
    assert_eq!(plan.user_id, "u1");
    assert_eq!(plan.number_of_days, 2);
    assert_eq!(plan.start_date.to_string(), "2024-03-01");
    assert_eq!(plan.preferred_learning_style, vec!["visual", "kinesthetic"]);
    assert_eq!(plan.study_plan.len(), 2);
    assert_eq!(plan.study_plan[0].tasks[0].resource_urls, vec!["https://rustup.rs"]);
    assert_eq!(plan.study_plan[0].tasks[0].status, TaskStatus::Completed);
}

#[test]
fn test_missing_task_fields_use_defaults() {
    let plan: CoursePlan = serde_json::from_value(plan_json()).expect("valid plan");
    let task = &plan.study_plan[1].tasks[0];

    assert_eq!(task.status, TaskStatus::Pending);
    assert!(task.resource_urls.is_empty());
}

#[test]
fn test_plan_serializes_camel_case_fields() {
    let plan: CoursePlan = serde_json::from_value(plan_json()).expect("valid plan");
    let value = serde_json::to_value(&plan).expect("serializable");

    assert_eq!(value["userId"], "u1");
    assert_eq!(value["numberOfDays"], 2);
    assert_eq!(value["startDate"], "2024-03-01");
    assert_eq!(value["studyPlan"][0]["tasks"][0]["resourceUrls"][0], "https://rustup.rs");
    assert_eq!(value["studyPlan"][0]["tasks"][1]["status"], "pending");
    assert!(value.get("user_id").is_none());
}

#[test]
fn test_invalid_start_date_is_rejected() {
    let mut value = plan_json();
    value["startDate"] = json!("next tuesday");

    let error = serde_json::from_value::<CoursePlan>(value).expect_err("invalid date");
    assert!(error.to_string().contains("Invalid start date"));
}

#[test]
fn test_unknown_status_is_rejected() {
    let mut value = plan_json();
    value["studyPlan"][0]["tasks"][0]["status"] = json!("skipped");

    assert!(serde_json::from_value::<CoursePlan>(value).is_err());
}

#[test]
fn test_task_status_wire_form() {
    assert_eq!(
        serde_json::from_value::<TaskStatus>(json!("completed")).expect("valid status"),
        TaskStatus::Completed
    );
    assert_eq!(
        serde_json::to_value(TaskStatus::Pending).expect("serializable"),
        json!(TaskStatus::Pending.as_str())
    );
    assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
    assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
}

#[test]
fn test_progress_from_plan() {
    let plan: CoursePlan = serde_json::from_value(plan_json()).expect("valid plan");
    let progress = Progress::from(&plan);

    assert_eq!(progress.total_tasks, 3);
    assert_eq!(progress.completed_tasks, 1);
    assert_eq!(progress.current_day, Some(0));
    assert_eq!(progress.percent(), 33);
    assert!(!progress.is_finished());
}

#[test]
fn test_progress_of_empty_plan() {
    let mut plan: CoursePlan = serde_json::from_value(plan_json()).expect("valid plan");
    plan.study_plan.clear();
    let progress = Progress::from(&plan);

    assert_eq!(progress.percent(), 0);
    assert!(progress.is_finished());
}

#[test]
fn test_course_summary_listing() {
    let summaries: Vec<CourseSummary> = serde_json::from_value(json!([
        {
            "id": "c1",
            "name": "Rust Basics",
            "startDate": "2024-03-01",
            "numberOfDays": 7,
            "preferredLearningStyle": ["visual"],
            "progress": 57.14
        },
        { "id": "c2", "name": "Go", "startDate": "2024-04-01", "numberOfDays": 3 }
    ]))
    .expect("valid listing");

    assert_eq!(summaries.len(), 2);
    assert!((summaries[0].progress - 57.14).abs() < f64::EPSILON);
    assert_eq!(summaries[1].progress, 0.0);
    assert!(summaries[1].preferred_learning_style.is_empty());
}

#[test]
fn test_profile_update_omits_email() {
    let profile: UserProfile = serde_json::from_value(json!({
        "name": "Ada",
        "email": "ada@example.com",
        "bio": "Mathematician",
        "profile": "https://img/ada.png"
    }))
    .expect("valid profile");

    let body = serde_json::to_value(ProfileUpdate::from(&profile)).expect("serializable");
    assert_eq!(
        body,
        json!({ "name": "Ada", "bio": "Mathematician", "profile": "https://img/ada.png" })
    );
}
