use crate::search::State;
use std::fmt::{self, Display, Formatter};

/// The goal of a task. A goal is a partial state: it is satisfied by every
/// state that contains all of its predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    state: State,
}

impl Goal {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Returns true if the goal is satisfied by the given state.
    pub fn is_satisfied(&self, state: &State) -> bool {
        self.state.is_subset(state)
    }

    /// Number of goal predicates the given state does not contain.
    pub fn unsatisfied_count(&self, state: &State) -> usize {
        self.state.count_missing_from(state)
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl From<State> for Goal {
    fn from(state: State) -> Self {
        Self::new(state)
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::state;

    #[test]
    fn subset_is_enough() {
        let goal = Goal::new(state(&["ON B TABLE"]));
        assert!(goal.is_satisfied(&state(&["ON A B", "ON B TABLE", "CLEAR A"])));
    }

    #[test]
    fn missing_predicate_fails() {
        let goal = Goal::new(state(&["ON A TABLE", "CLEAR A"]));
        let current = state(&["ON A B", "CLEAR A", "CLEAR B"]);
        assert!(!goal.is_satisfied(&current));
        assert_eq!(goal.unsatisfied_count(&current), 1);
    }

    #[test]
    fn empty_goal_is_always_satisfied() {
        let goal = Goal::new(State::default());
        assert!(goal.is_satisfied(&State::default()));
        assert!(goal.is_satisfied(&state(&["CLEAR A"])));
    }
}
