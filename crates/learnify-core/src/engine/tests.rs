//! Tests for the progression engine.

use super::*;
use crate::models::{DayPlan, Task};

fn task(title: &str, status: TaskStatus) -> Task {
    Task {
        title: title.to_string(),
        description: format!("{title} description"),
        resource_urls: vec![format!("https://example.com/{title}")],
        status,
    }
}

pub(super) fn plan_with_days(days: Vec<Vec<TaskStatus>>) -> CoursePlan {
    let study_plan: Vec<DayPlan> = days
        .into_iter()
        .enumerate()
        .map(|(day, statuses)| DayPlan {
            day: format!("Day {}", day + 1),
            tasks: statuses
                .into_iter()
                .enumerate()
                .map(|(index, status)| task(&format!("t{day}{index}"), status))
                .collect(),
        })
        .collect();

    CoursePlan {
        id: "course-1".to_string(),
        user_id: "user-1".to_string(),
        name: "Rust Basics".to_string(),
        number_of_days: study_plan.len() as u32,
        start_date: "2024-03-01".parse().expect("valid date"),
        preferred_learning_style: vec!["visual".to_string()],
        study_plan,
    }
}

use TaskStatus::{Completed, Pending};

#[test]
fn test_toggle_blocked_when_previous_day_pending() {
    // Scenario A
    let plan = plan_with_days(vec![vec![Pending, Pending], vec![Pending]]);
    let mut engine = PlanProgressionEngine::new(plan.clone());

    let result = engine.toggle_task(1, 0);

    assert_eq!(
        result,
        Err(GatingError::PreviousDayIncomplete { blocking_day: 0 })
    );
    assert_eq!(engine.snapshot(), &plan);
    assert!(!engine.is_dirty());
}

#[test]
fn test_blocked_toggle_leaves_plan_unchanged_for_any_target_status() {
    let plan = plan_with_days(vec![
        vec![Completed, Pending],
        vec![Completed],
        vec![Completed, Pending],
    ]);
    let mut engine = PlanProgressionEngine::new(plan.clone());

    for (day, task) in [(1, 0), (2, 0), (2, 1)] {
        assert!(engine.toggle_task(day, task).is_err());
        assert_eq!(engine.snapshot(), &plan);
    }
}

#[test]
fn test_gate_reports_first_incomplete_day() {
    let plan = plan_with_days(vec![vec![Completed], vec![Pending], vec![Pending]]);
    assert_eq!(
        plan.check_gate(2),
        Err(GatingError::PreviousDayIncomplete { blocking_day: 1 })
    );
    assert_eq!(plan.check_gate(1), Ok(()));
    assert_eq!(plan.check_gate(0), Ok(()));
}

#[test]
fn test_completing_day_unlocks_next_day() {
    // Scenario B
    let plan = plan_with_days(vec![vec![Pending, Pending], vec![Pending]]);
    let mut engine = PlanProgressionEngine::new(plan);

    assert_eq!(engine.toggle_task(0, 0), Ok(Completed));
    assert_eq!(engine.snapshot().task(0, 0).status, Completed);
    assert_eq!(engine.toggle_task(0, 1), Ok(Completed));
    assert_eq!(engine.toggle_task(1, 0), Ok(Completed));
    assert_eq!(engine.snapshot().task(1, 0).status, Completed);
}

#[test]
fn test_tasks_within_a_day_are_independent() {
    let plan = plan_with_days(vec![vec![Pending, Pending, Pending]]);
    let mut engine = PlanProgressionEngine::new(plan);

    assert_eq!(engine.toggle_task(0, 2), Ok(Completed));
    assert_eq!(engine.snapshot().task(0, 0).status, Pending);
    assert_eq!(engine.snapshot().task(0, 1).status, Pending);
}

#[test]
fn test_demotion_of_single_task() {
    // Scenario C
    let plan = plan_with_days(vec![vec![Completed]]);
    let mut engine = PlanProgressionEngine::new(plan);

    assert_eq!(engine.toggle_task(0, 0), Ok(Pending));
    assert_eq!(engine.snapshot().task(0, 0).status, Pending);
}

#[test]
fn test_demotion_ignores_later_days() {
    let plan = plan_with_days(vec![vec![Completed], vec![Completed, Completed]]);
    let mut engine = PlanProgressionEngine::new(plan);

    assert_eq!(engine.toggle_task(0, 0), Ok(Pending));
    assert_eq!(engine.snapshot().task(1, 0).status, Completed);
    assert_eq!(engine.snapshot().task(1, 1).status, Completed);
}

#[test]
fn test_toggle_flips_only_the_target() {
    let plan = plan_with_days(vec![
        vec![Completed, Completed],
        vec![Pending, Completed, Pending],
        vec![Pending],
    ]);
    let mut engine = PlanProgressionEngine::new(plan.clone());

    engine.toggle_task(1, 1).expect("day 0 is complete");

    let snapshot = engine.snapshot();
    for (day_index, day) in plan.study_plan.iter().enumerate() {
        for (task_index, original) in day.tasks.iter().enumerate() {
            let current = snapshot.task(day_index, task_index);
            if (day_index, task_index) == (1, 1) {
                assert_eq!(current.status, Pending);
                assert_eq!(current.title, original.title);
                assert_eq!(current.resource_urls, original.resource_urls);
            } else {
                assert_eq!(current, original);
            }
        }
    }
}

#[test]
fn test_double_toggle_restores_plan() {
    let plan = plan_with_days(vec![vec![Completed], vec![Pending, Completed]]);
    let mut engine = PlanProgressionEngine::new(plan.clone());

    engine.toggle_task(1, 0).expect("first toggle");
    engine.toggle_task(1, 0).expect("second toggle");

    assert_eq!(engine.snapshot(), &plan);
    assert!(!engine.is_dirty());
}

#[test]
fn test_edit_resource_urls_drops_blank_lines() {
    let plan = plan_with_days(vec![vec![Pending]]);
    let mut engine = PlanProgressionEngine::new(plan);

    engine.edit_task(0, 0, &TaskEdit::ResourceUrls("a\n\nb\n ".to_string()));

    assert_eq!(engine.snapshot().task(0, 0).resource_urls, vec!["a", "b"]);
}

#[test]
fn test_edit_resource_urls_trims_and_keeps_order() {
    let plan = plan_with_days(vec![vec![Pending]]);
    let mut engine = PlanProgressionEngine::new(plan);

    engine.edit_task(
        0,
        0,
        &TaskEdit::ResourceUrls("  https://z.dev \r\nhttps://a.dev\n\t\n".to_string()),
    );

    assert_eq!(
        engine.snapshot().task(0, 0).resource_urls,
        vec!["https://z.dev", "https://a.dev"]
    );
}

#[test]
fn test_edit_title_and_description_keep_status_and_resources() {
    let plan = plan_with_days(vec![vec![Completed]]);
    let mut engine = PlanProgressionEngine::new(plan.clone());

    engine.edit_task(0, 0, &TaskEdit::Title("  New title ".to_string()));
    engine.edit_task(0, 0, &TaskEdit::Description(String::new()));

    let edited = engine.snapshot().task(0, 0);
    let original = plan.task(0, 0);
    assert_eq!(edited.title, "  New title ");
    assert_eq!(edited.description, "");
    assert_eq!(edited.status, original.status);
    assert_eq!(edited.resource_urls, original.resource_urls);
}

#[test]
fn test_edits_are_not_gated() {
    let plan = plan_with_days(vec![vec![Pending], vec![Pending]]);
    let mut engine = PlanProgressionEngine::new(plan);

    engine.edit_task(1, 0, &TaskEdit::Title("Later".to_string()));

    assert_eq!(engine.snapshot().task(1, 0).title, "Later");
    assert!(engine.is_dirty());
}

#[test]
fn test_revert_last_undoes_single_toggle() {
    let plan = plan_with_days(vec![vec![Pending, Pending]]);
    let mut engine = PlanProgressionEngine::new(plan);

    engine.toggle_task(0, 0).expect("toggle");
    let after_first = engine.snapshot().clone();
    engine.toggle_task(0, 1).expect("toggle");

    assert!(engine.revert_last());
    assert_eq!(engine.snapshot(), &after_first);
    assert!(!engine.revert_last());
}

#[test]
fn test_rollback_restores_durable_snapshot() {
    let plan = plan_with_days(vec![vec![Pending, Pending]]);
    let mut engine = PlanProgressionEngine::new(plan.clone());

    engine.toggle_task(0, 0).expect("toggle");
    engine.edit_task(0, 1, &TaskEdit::Title("changed".to_string()));
    engine.rollback();

    assert_eq!(engine.snapshot(), &plan);
    assert!(!engine.is_dirty());
}

#[test]
fn test_commit_moves_rollback_point() {
    let plan = plan_with_days(vec![vec![Pending, Pending]]);
    let mut engine = PlanProgressionEngine::new(plan);

    engine.toggle_task(0, 0).expect("toggle");
    engine.commit();
    let committed = engine.snapshot().clone();
    engine.toggle_task(0, 1).expect("toggle");
    engine.rollback();

    assert_eq!(engine.snapshot(), &committed);
    assert_eq!(engine.durable(), &committed);
}

#[test]
fn test_load_replaces_snapshot_wholesale() {
    let mut engine = PlanProgressionEngine::new(plan_with_days(vec![vec![Pending]]));
    engine.toggle_task(0, 0).expect("toggle");

    let replacement = plan_with_days(vec![vec![Completed], vec![Pending]]);
    engine.load(replacement.clone());

    assert_eq!(engine.snapshot(), &replacement);
    assert!(!engine.is_dirty());
    assert!(!engine.revert_last());
}

#[test]
#[should_panic(expected = "day index 3 out of range")]
fn test_out_of_range_day_panics() {
    let mut engine = PlanProgressionEngine::new(plan_with_days(vec![vec![Pending]]));
    let _ = engine.toggle_task(3, 0);
}

#[test]
#[should_panic(expected = "task index 5 out of range")]
fn test_out_of_range_task_panics() {
    let mut engine = PlanProgressionEngine::new(plan_with_days(vec![vec![Pending]]));
    engine.edit_task(0, 5, &TaskEdit::Title("x".to_string()));
}
