//! Property-based tests for the progression engine.

use proptest::prelude::*;

use super::{tests::plan_with_days, GatingError, PlanProgressionEngine};
use crate::models::TaskStatus;

fn status(completed: bool) -> TaskStatus {
    if completed {
        TaskStatus::Completed
    } else {
        TaskStatus::Pending
    }
}

/// Plans of one to four days with up to three tasks each.
fn days_strategy() -> impl Strategy<Value = Vec<Vec<TaskStatus>>> {
    prop::collection::vec(
        prop::collection::vec(any::<bool>().prop_map(status), 0..4),
        1..5,
    )
}

/// Picks an existing task position, or `None` for a plan without tasks.
fn pick_position(days: &[Vec<TaskStatus>], seed: usize) -> Option<(usize, usize)> {
    let positions: Vec<(usize, usize)> = days
        .iter()
        .enumerate()
        .flat_map(|(day, tasks)| (0..tasks.len()).map(move |task| (day, task)))
        .collect();
    if positions.is_empty() {
        None
    } else {
        Some(positions[seed % positions.len()])
    }
}

proptest! {
    #[test]
    fn toggle_respects_earlier_days(days in days_strategy(), seed in any::<usize>()) {
        let position = pick_position(&days, seed);
        prop_assume!(position.is_some());
        let (day, task) = position.unwrap();

        let plan = plan_with_days(days.clone());
        let mut engine = PlanProgressionEngine::new(plan.clone());
        let blocking_day = days[..day]
            .iter()
            .position(|tasks| tasks.iter().any(|status| status.is_pending()));

        let result = engine.toggle_task(day, task);

        match blocking_day {
            Some(blocking_day) => {
                prop_assert_eq!(result, Err(GatingError::PreviousDayIncomplete { blocking_day }));
                prop_assert_eq!(engine.snapshot(), &plan);
            }
            None => {
                let expected = days[day][task].toggled();
                prop_assert_eq!(result, Ok(expected));
                for (d, tasks) in days.iter().enumerate() {
                    for (t, before) in tasks.iter().enumerate() {
                        let after = engine.snapshot().task(d, t);
                        if (d, t) == (day, task) {
                            prop_assert_eq!(after.status, expected);
                        } else {
                            prop_assert_eq!(after, plan.task(d, t));
                            prop_assert_eq!(after.status, *before);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn toggling_twice_restores_the_plan(days in days_strategy(), seed in any::<usize>()) {
        let position = pick_position(&days, seed);
        prop_assume!(position.is_some());
        let (day, task) = position.unwrap();
        prop_assume!(days[..day].iter().all(|tasks| tasks.iter().all(|s| !s.is_pending())));

        let plan = plan_with_days(days);
        let mut engine = PlanProgressionEngine::new(plan.clone());

        prop_assert!(engine.toggle_task(day, task).is_ok());
        prop_assert!(engine.toggle_task(day, task).is_ok());
        prop_assert_eq!(engine.snapshot(), &plan);
    }
}
