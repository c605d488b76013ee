use crate::search::{Goal, Heuristic, HeuristicValue, State};

/// Counts the goal predicates that do not hold in a state. The value is zero
/// exactly when the goal is satisfied.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalCounting;

impl GoalCounting {
    pub fn new() -> Self {
        GoalCounting {}
    }
}

impl Heuristic for GoalCounting {
    fn evaluate(&mut self, state: &State, goal: &Goal) -> HeuristicValue {
        goal.unsatisfied_count(state) as HeuristicValue
    }
}
