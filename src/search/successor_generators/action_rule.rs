use crate::search::{Action, State};
use std::fmt::Debug;

/// An action rule describes one kind of move in the blocks world: when it is
/// applicable, and what the world looks like afterwards.
pub trait ActionRule: Debug {
    /// All ground actions of this rule applicable in `state`, in a
    /// deterministic order.
    fn applicable_actions(&self, state: &State) -> Vec<Action>;

    /// The state reached by applying `action` to `state`. Returns `None` if
    /// the action was not produced by this rule.
    fn apply(&self, state: &State, action: &Action) -> Option<State>;
}
