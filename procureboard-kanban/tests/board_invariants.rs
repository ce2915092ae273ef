//! End-to-end checks of board invariants through the public API

use chrono::{Duration, Utc};
use procureboard_kanban::{
    defaults::{BLOCKED_COLUMN, COMPLETED_COLUMN, IN_PROGRESS_COLUMN, TODO_COLUMN},
    Action, BoardConfig, BoardController, BoardEvent, Condition, DragReconciler, DragTarget,
    KanbanError, Rule, RuleUpdate, Subtask, Task, TaskId,
};
use std::collections::HashSet;

/// Every task sits in exactly one column and carries that column's title
fn assert_ownership(ctrl: &BoardController) {
    let mut seen = HashSet::new();
    for column in ctrl.columns() {
        for task in &column.tasks {
            assert!(seen.insert(task.id.clone()), "task {} appears twice", task.id);
            assert_eq!(task.status, column.title, "status out of sync for {}", task.id);
        }
    }
}

fn ids(ctrl: &BoardController, column: &str) -> Vec<String> {
    ctrl.find_column(&column.into())
        .unwrap()
        .tasks
        .iter()
        .map(|t| t.id.to_string())
        .collect()
}

fn seeded() -> BoardController {
    BoardController::new(BoardConfig::default())
}

#[test_log::test]
fn test_ownership_holds_through_a_session() {
    let mut ctrl = seeded();
    let late = ctrl
        .add_task(
            &TODO_COLUMN.into(),
            Task::new("Servers").with_due_date(Utc::now() - Duration::hours(3)),
        )
        .unwrap();
    let laptops = ctrl
        .add_task(&TODO_COLUMN.into(), Task::new("Laptops"))
        .unwrap();
    assert_ownership(&ctrl);

    let mut drag = DragReconciler::new();
    drag.pick_up(&ctrl, &laptops).unwrap();
    for column in [IN_PROGRESS_COLUMN, BLOCKED_COLUMN, IN_PROGRESS_COLUMN] {
        drag.hover(&mut ctrl, &DragTarget::Column(column.into()))
            .unwrap();
        assert_ownership(&ctrl);
    }
    drag.drop(&mut ctrl, None).unwrap();
    assert_ownership(&ctrl);

    let late_task = ctrl.find_task(&late).unwrap().clone();
    ctrl.duplicate_task(&late_task, Some(&TODO_COLUMN.into()))
        .unwrap();
    ctrl.delete_task(&laptops);
    assert_ownership(&ctrl);
    assert_eq!(ctrl.board().task_count(), 2);
}

#[test]
fn test_non_empty_column_is_never_deleted() {
    let mut ctrl = seeded();
    ctrl.add_task(&IN_PROGRESS_COLUMN.into(), Task::new("Furniture"))
        .unwrap();

    let err = ctrl.delete_column(&IN_PROGRESS_COLUMN.into()).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, KanbanError::ColumnNotEmpty { .. }));
    assert_eq!(ctrl.columns().len(), 4);
}

#[test]
fn test_second_pass_moves_nothing() {
    let mut ctrl = BoardController::new(BoardConfig::default().with_seed_defaults(false));
    let todo = ctrl.add_column("To Do").unwrap();
    let blocked = ctrl.add_column("Blocked").unwrap();
    let done = ctrl.add_column("Completed").unwrap();

    ctrl.add_task(
        &todo,
        Task::new("late").with_due_date(Utc::now() - Duration::days(1)),
    )
    .unwrap();
    ctrl.add_task(
        &todo,
        Task::new("finished").with_subtask(Subtask::new("x").completed()),
    )
    .unwrap();

    // Rules start disabled so nothing moves until they are switched on
    for (name, condition, target) in [
        ("overdue", Condition::DueDateOverdue, blocked.clone()),
        ("subtasks", Condition::AllSubtasksCompleted, done.clone()),
    ] {
        ctrl.add_rule(Rule::new(name, condition, Action::move_to(target)).with_enabled(false))
            .unwrap();
    }
    assert_eq!(ids(&ctrl, todo.as_str()).len(), 2);

    let rule_ids: Vec<_> = ctrl.rules().iter().map(|r| r.id.clone()).collect();
    for id in &rule_ids {
        ctrl.update_rule(id, RuleUpdate::new().with_enabled(true))
            .unwrap();
    }
    assert!(ctrl.find_column(&todo).unwrap().tasks.is_empty());

    assert!(ctrl.run_rules().is_empty());
    assert!(ctrl.run_rules().is_empty());
}

#[test]
fn test_cross_column_drop_preserves_order() {
    let mut ctrl = seeded();
    for id in ["t1", "t2", "t3"] {
        ctrl.add_task(&TODO_COLUMN.into(), Task::new(id).with_id(id))
            .unwrap();
    }
    ctrl.add_task(&IN_PROGRESS_COLUMN.into(), Task::new("b").with_id("b"))
        .unwrap();

    let mut drag = DragReconciler::new();
    drag.pick_up(&ctrl, &"t2".into()).unwrap();
    drag.hover(&mut ctrl, &DragTarget::Column(IN_PROGRESS_COLUMN.into()))
        .unwrap();
    drag.drop(&mut ctrl, Some(&DragTarget::Column(IN_PROGRESS_COLUMN.into())))
        .unwrap();

    assert_eq!(ids(&ctrl, TODO_COLUMN), vec!["t1", "t3"]);
    assert_eq!(ids(&ctrl, IN_PROGRESS_COLUMN), vec!["b", "t2"]);
}

#[test]
fn test_same_column_drop_is_stable_move() {
    let mut ctrl = seeded();
    for id in ["t1", "t2", "t3"] {
        ctrl.add_task(&TODO_COLUMN.into(), Task::new(id).with_id(id))
            .unwrap();
    }

    let mut drag = DragReconciler::new();
    drag.pick_up(&ctrl, &"t1".into()).unwrap();
    drag.drop(&mut ctrl, Some(&DragTarget::Task("t3".into())))
        .unwrap();
    assert_eq!(ids(&ctrl, TODO_COLUMN), vec!["t2", "t3", "t1"]);

    drag.pick_up(&ctrl, &"t1".into()).unwrap();
    drag.drop(&mut ctrl, Some(&DragTarget::Task("t2".into())))
        .unwrap();
    assert_eq!(ids(&ctrl, TODO_COLUMN), vec!["t1", "t2", "t3"]);
}

#[test]
fn test_two_matching_rules_move_task_once() {
    let mut ctrl = seeded();
    ctrl.add_rule(
        Rule::new(
            "Everything with subtasks to progress",
            Condition::AllSubtasksCompleted,
            Action::move_to(IN_PROGRESS_COLUMN),
        ),
    )
    .unwrap();
    ctrl.drain_events();

    let id = ctrl
        .add_task(
            &TODO_COLUMN.into(),
            Task::new("x").with_subtask(Subtask::new("a").completed()),
        )
        .unwrap();

    // Default "subtasks → Completed" rule comes first in the list
    assert_eq!(ctrl.find_task(&id).unwrap().status, "Completed");
    let rule_moves: Vec<_> = ctrl
        .drain_events()
        .into_iter()
        .filter(BoardEvent::is_automatic)
        .collect();
    assert_eq!(rule_moves.len(), 1);
    match &rule_moves[0] {
        BoardEvent::TaskMovedByRule { rule_name, to, .. } => {
            assert_eq!(rule_name, "Move completed tasks when all subtasks done");
            assert_eq!(to.as_str(), COMPLETED_COLUMN);
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_overdue_task_lands_in_blocked() {
    let mut ctrl = seeded();
    let id = ctrl
        .add_task(
            &TODO_COLUMN.into(),
            Task::new("Servers").with_due_date(Utc::now() - Duration::days(1)),
        )
        .unwrap();

    assert_eq!(ids(&ctrl, BLOCKED_COLUMN), vec![id.to_string()]);
    assert_eq!(ctrl.find_task(&id).unwrap().status, "Blocked");

    let message = ctrl
        .events()
        .iter()
        .find(|e| e.is_automatic())
        .map(BoardEvent::message)
        .unwrap();
    assert_eq!(
        message,
        "\"Servers\" moved to Blocked by rule: Move overdue tasks to Blocked"
    );
}

#[test]
fn test_subtask_examples() {
    let mut ctrl = seeded();
    let done = ctrl
        .add_task(
            &TODO_COLUMN.into(),
            Task::new("done")
                .with_subtask(Subtask::new("a").completed())
                .with_subtask(Subtask::new("b").completed()),
        )
        .unwrap();
    let partial = ctrl
        .add_task(
            &TODO_COLUMN.into(),
            Task::new("partial")
                .with_subtask(Subtask::new("a").completed())
                .with_subtask(Subtask::new("b")),
        )
        .unwrap();

    assert_eq!(ctrl.find_task(&done).unwrap().status, "Completed");
    assert_eq!(ctrl.find_task(&partial).unwrap().status, "To Do");
}

#[test]
fn test_duplicate_example() {
    let mut ctrl = seeded();
    let source: TaskId = ctrl
        .add_task(
            &TODO_COLUMN.into(),
            Task::new("Foo").with_subtask(Subtask::new("quote")),
        )
        .unwrap();

    let original = ctrl.find_task(&source).unwrap().clone();
    let copy = ctrl
        .duplicate_task(&original, Some(&IN_PROGRESS_COLUMN.into()))
        .unwrap();
    assert_ne!(copy, source);
    assert_eq!(ctrl.find_task(&copy).unwrap().title, "Foo (Copy)");
    assert_eq!(
        ctrl.find_task(&copy).unwrap().subtasks,
        ctrl.find_task(&source).unwrap().subtasks
    );
    assert_eq!(ids(&ctrl, IN_PROGRESS_COLUMN), vec![copy.to_string()]);
}
