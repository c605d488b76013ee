use crate::search::{successor_generators::ActionRule, Action, Object, Predicate, State};

/// Move a block that sits on something onto the table.
///
/// `ON a b` can be rewritten to `ON a TABLE` when both `CLEAR a` and
/// `CLEAR b` hold. No `CLEAR` fact is added or removed by the move.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnstackToTable;

impl UnstackToTable {
    pub fn new() -> Self {
        Self
    }
}

impl ActionRule for UnstackToTable {
    fn applicable_actions(&self, state: &State) -> Vec<Action> {
        state
            .on_relations()
            .filter_map(|predicate| match *predicate {
                Predicate::On(block, from)
                    if state.contains(&Predicate::Clear(block))
                        && state.contains(&Predicate::Clear(from)) =>
                {
                    Some(Action::UnstackToTable { block, from })
                }
                _ => None,
            })
            .collect()
    }

    fn apply(&self, state: &State, action: &Action) -> Option<State> {
        match *action {
            Action::UnstackToTable { block, from } => Some(state.with_replaced(
                &Predicate::On(block, from),
                Predicate::On(block, Object::table()),
            )),
        }
    }
}
