//! Rule engine
//!
//! A pass scans every task against the enabled rules, collects the moves the
//! rules ask for, then applies them as one batch. For each task the first
//! enabled rule (in list order) whose condition holds decides the outcome, so
//! a task moves at most once per pass. A second pass with no change in
//! between finds every task already where its deciding rule wants it.
//!
//! One rule set breaks that: an overdue rule that targets the terminal
//! column, followed by another rule the same task matches. Inside the
//! terminal column the task is no longer overdue, so the later rule moves it
//! out, and the next pass sends it back. Every pass moves it once.

use crate::types::{Action, Board, Column, ColumnId, Condition, RuleId, Task, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A move computed (and later applied) by a rule pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMove {
    pub task_id: TaskId,
    pub title: String,
    pub from: ColumnId,
    pub to: ColumnId,
    pub to_title: String,
    pub rule_id: RuleId,
    pub rule_name: String,
}

/// Evaluates rules against a board
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    /// Title of the column whose tasks count as resolved
    terminal_column: &'a str,
}

impl<'a> RuleEngine<'a> {
    pub fn new(terminal_column: &'a str) -> Self {
        Self { terminal_column }
    }

    /// Check one condition against a task sitting in `column`
    pub fn condition_holds(
        &self,
        condition: &Condition,
        task: &Task,
        column: &Column,
        now: DateTime<Utc>,
    ) -> bool {
        match condition {
            Condition::DueDateOverdue => {
                task.is_past_due(now) && column.title != self.terminal_column
            }
            Condition::AllSubtasksCompleted => task.all_subtasks_completed(),
            Condition::CustomField {
                field,
                operator,
                value,
            } => task
                .custom_field(field)
                .is_some_and(|f| operator.apply(&f.value, value)),
        }
    }

    /// Compute the moves a pass would make, without touching the board
    pub fn plan(&self, board: &Board, now: DateTime<Utc>) -> Vec<RuleMove> {
        // Resolve targets once; a dangling target is a configuration error
        // and only that rule is skipped.
        let active: Vec<_> = board
            .rules()
            .iter()
            .filter(|r| r.enabled)
            .filter_map(|rule| {
                let Action::MoveToColumn { target_column_id } = &rule.action;
                match board.find_column(target_column_id) {
                    Some(target) => Some((rule, target)),
                    None => {
                        warn!(
                            rule_id = %rule.id,
                            rule = %rule.name,
                            target = %target_column_id,
                            "rule targets a missing column, skipping"
                        );
                        None
                    }
                }
            })
            .collect();

        if active.is_empty() {
            return Vec::new();
        }

        let mut moves = Vec::new();
        for column in board.columns() {
            for task in &column.tasks {
                let decided = active
                    .iter()
                    .find(|(rule, _)| self.condition_holds(&rule.condition, task, column, now));

                if let Some((rule, target)) = decided {
                    if target.id != column.id {
                        moves.push(RuleMove {
                            task_id: task.id.clone(),
                            title: task.title.clone(),
                            from: column.id.clone(),
                            to: target.id.clone(),
                            to_title: target.title.clone(),
                            rule_id: rule.id.clone(),
                            rule_name: rule.name.clone(),
                        });
                    }
                }
            }
        }
        moves
    }

    /// Run a full pass: plan, then apply every move. Returns the moves applied.
    pub fn run(&self, board: &mut Board, now: DateTime<Utc>) -> Vec<RuleMove> {
        let planned = self.plan(board, now);
        let mut applied = Vec::with_capacity(planned.len());

        for mv in planned {
            let Some(target) = board.column_index(&mv.to) else {
                continue;
            };
            let Some((_, task)) = board.take_task(&mv.task_id) else {
                continue;
            };
            board.push_task(target, task);
            info!(
                task_id = %mv.task_id,
                from = %mv.from,
                to = %mv.to,
                rule = %mv.rule_name,
                "task moved by rule"
            );
            applied.push(mv);
        }

        debug!(moves = applied.len(), "rule pass complete");
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CustomField, FieldOperator, Rule, Subtask};
    use chrono::Duration;

    fn board_with(tasks_in_todo: Vec<Task>, rules: Vec<Rule>) -> Board {
        let mut todo = Column::new("To Do").with_id("todo");
        todo.tasks = tasks_in_todo;
        Board::new(
            vec![
                todo,
                Column::new("Blocked").with_id("blocked"),
                Column::new("Completed").with_id("done"),
            ],
            rules,
        )
    }

    fn overdue_rule() -> Rule {
        Rule::new("Overdue", Condition::DueDateOverdue, Action::move_to("blocked")).with_id("r1")
    }

    fn subtasks_rule() -> Rule {
        Rule::new(
            "Subtasks done",
            Condition::AllSubtasksCompleted,
            Action::move_to("done"),
        )
        .with_id("r2")
    }

    #[test]
    fn test_overdue_task_moves_to_blocked() {
        let now = Utc::now();
        let task = Task::new("late")
            .with_id("t1")
            .with_due_date(now - Duration::days(1));
        let mut board = board_with(vec![task], vec![overdue_rule()]);

        let moves = RuleEngine::new("Completed").run(&mut board, now);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].rule_name, "Overdue");

        let task = board.find_task(&"t1".into()).unwrap();
        assert_eq!(task.status, "Blocked");
        assert_eq!(board.column_of(&"t1".into()).unwrap().id.as_str(), "blocked");
    }

    #[test]
    fn test_overdue_ignores_terminal_column() {
        let now = Utc::now();
        let mut board = board_with(Vec::new(), vec![overdue_rule()]);
        let done = board.column_index(&"done".into()).unwrap();
        board.push_task(
            done,
            Task::new("finished")
                .with_id("t1")
                .with_due_date(now - Duration::days(10)),
        );

        assert!(RuleEngine::new("Completed").run(&mut board, now).is_empty());
    }

    #[test]
    fn test_subtasks_rule_requires_all_completed() {
        let now = Utc::now();
        let all_done = Task::new("a")
            .with_id("a")
            .with_subtask(Subtask::new("x").completed())
            .with_subtask(Subtask::new("y").completed());
        let partial = Task::new("b")
            .with_id("b")
            .with_subtask(Subtask::new("x").completed())
            .with_subtask(Subtask::new("y"));
        let mut board = board_with(vec![all_done, partial], vec![subtasks_rule()]);

        let moves = RuleEngine::new("Completed").run(&mut board, now);
        assert_eq!(moves.len(), 1);
        assert_eq!(board.column_of(&"a".into()).unwrap().title, "Completed");
        assert_eq!(board.column_of(&"b".into()).unwrap().title, "To Do");
    }

    #[test]
    fn test_custom_field_missing_is_false() {
        let now = Utc::now();
        let rule = Rule::new(
            "IT items",
            Condition::custom_field("Department", FieldOperator::NotEquals, "HR"),
            Action::move_to("blocked"),
        );
        let with_field = Task::new("a")
            .with_id("a")
            .with_custom_field(CustomField::new("Department", "IT"));
        let without = Task::new("b").with_id("b");
        let mut board = board_with(vec![with_field, without], vec![rule]);

        RuleEngine::new("Completed").run(&mut board, now);
        assert_eq!(board.column_of(&"a".into()).unwrap().title, "Blocked");
        assert_eq!(board.column_of(&"b".into()).unwrap().title, "To Do");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let now = Utc::now();
        let task = Task::new("both")
            .with_id("t1")
            .with_due_date(now - Duration::days(1))
            .with_subtask(Subtask::new("x").completed());
        let mut board = board_with(vec![task], vec![subtasks_rule(), overdue_rule()]);

        let moves = RuleEngine::new("Completed").run(&mut board, now);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].rule_id.as_str(), "r2");
        assert_eq!(board.column_of(&"t1".into()).unwrap().title, "Completed");
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let now = Utc::now();
        let task = Task::new("late")
            .with_id("t1")
            .with_due_date(now - Duration::days(1));
        let mut board = board_with(vec![task], vec![overdue_rule().with_enabled(false)]);

        assert!(RuleEngine::new("Completed").run(&mut board, now).is_empty());
    }

    #[test]
    fn test_missing_target_column_is_skipped() {
        let now = Utc::now();
        let task = Task::new("late")
            .with_id("t1")
            .with_due_date(now - Duration::days(1))
            .with_subtask(Subtask::new("x").completed());
        let broken = Rule::new("Broken", Condition::DueDateOverdue, Action::move_to("gone"));
        let mut board = board_with(vec![task], vec![broken, subtasks_rule()]);

        let moves = RuleEngine::new("Completed").run(&mut board, now);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].rule_id.as_str(), "r2");
    }

    #[test]
    fn test_pass_is_idempotent() {
        let now = Utc::now();
        let late = Task::new("late")
            .with_id("t1")
            .with_due_date(now - Duration::days(1));
        let done = Task::new("done")
            .with_id("t2")
            .with_subtask(Subtask::new("x").completed());
        let mut board = board_with(vec![late, done], vec![overdue_rule(), subtasks_rule()]);
        let engine = RuleEngine::new("Completed");

        assert_eq!(engine.run(&mut board, now).len(), 2);
        assert!(engine.run(&mut board, now).is_empty());
    }

    #[test]
    fn test_overdue_into_terminal_column_keeps_moving() {
        let now = Utc::now();
        let task = Task::new("late and done")
            .with_id("t1")
            .with_due_date(now - Duration::days(1))
            .with_subtask(Subtask::new("x").completed());
        let to_terminal =
            Rule::new("Overdue", Condition::DueDateOverdue, Action::move_to("done")).with_id("r1");
        let to_blocked = Rule::new(
            "Subtasks done",
            Condition::AllSubtasksCompleted,
            Action::move_to("blocked"),
        )
        .with_id("r2");
        let mut board = board_with(vec![task], vec![to_terminal, to_blocked]);
        let engine = RuleEngine::new("Completed");

        let first = engine.run(&mut board, now);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].to.as_str(), "done");

        let second = engine.run(&mut board, now);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].rule_id.as_str(), "r2");
        assert_eq!(second[0].to.as_str(), "blocked");

        let third = engine.run(&mut board, now);
        assert_eq!(third.len(), 1);
        assert_eq!(third[0].to.as_str(), "done");
    }

    #[test]
    fn test_plan_does_not_mutate() {
        let now = Utc::now();
        let task = Task::new("late")
            .with_id("t1")
            .with_due_date(now - Duration::days(1));
        let board = board_with(vec![task], vec![overdue_rule()]);
        let before = board.clone();

        let planned = RuleEngine::new("Completed").plan(&board, now);
        assert_eq!(planned.len(), 1);
        assert_eq!(board, before);
    }
}
