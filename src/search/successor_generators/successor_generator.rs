use crate::search::{
    successor_generators::{ActionRule, UnstackToTable},
    Action, State,
};
use tracing::trace;

/// A successor generator is responsible for generating the successors of a
/// given state. It owns the action rules of the domain and asks each of them,
/// in order, for the actions applicable in a state.
#[derive(Debug)]
pub struct SuccessorGenerator {
    rules: Vec<Box<dyn ActionRule>>,
}

impl SuccessorGenerator {
    pub fn new(rules: Vec<Box<dyn ActionRule>>) -> Self {
        Self { rules }
    }

    pub fn get_applicable_actions(&self, state: &State) -> Vec<Action> {
        self.rules
            .iter()
            .flat_map(|rule| rule.applicable_actions(state))
            .collect()
    }

    pub fn generate_successor(&self, state: &State, action: &Action) -> State {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(state, action))
            .unwrap_or_else(|| panic!("no action rule handles {}", action))
    }

    /// All states reachable from `state` with a single action. The order is
    /// deterministic: rule order first, then canonical predicate order.
    pub fn successors(&self, state: &State) -> Vec<State> {
        self.get_applicable_actions(state)
            .iter()
            .map(|action| {
                trace!(%action, "generating successor");
                self.generate_successor(state, action)
            })
            .collect()
    }
}

impl Default for SuccessorGenerator {
    fn default() -> Self {
        SuccessorGeneratorName::UnstackToTable.create()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum SuccessorGeneratorName {
    #[default]
    #[clap(help = "Only blocks with both sides clear may be moved onto the table.")]
    UnstackToTable,
}

impl SuccessorGeneratorName {
    pub fn create(&self) -> SuccessorGenerator {
        match self {
            SuccessorGeneratorName::UnstackToTable => {
                SuccessorGenerator::new(vec![Box::new(UnstackToTable::new())])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Predicate;
    use crate::test_utils::state;

    #[test]
    fn successors_of_the_single_move_scenario() {
        let generator = SuccessorGenerator::default();
        let successors = generator.successors(&state(&["ON A B", "CLEAR A", "CLEAR B"]));
        assert_eq!(successors, vec![state(&["ON A TABLE", "CLEAR A", "CLEAR B"])]);
    }

    #[test]
    fn successors_replace_exactly_one_on_relation() {
        let generator = SuccessorGenerator::default();
        let current = state(&[
            "ON A B", "ON C D", "ON B TABLE", "CLEAR A", "CLEAR B", "CLEAR C", "CLEAR D",
        ]);
        let successors = generator.successors(&current);
        assert_eq!(successors.len(), 2);
        for successor in &successors {
            let removed: Vec<&Predicate> =
                current.iter().filter(|p| !successor.contains(p)).collect();
            let added: Vec<&Predicate> =
                successor.iter().filter(|p| !current.contains(p)).collect();
            assert_eq!(removed.len(), 1);
            assert_eq!(added.len(), 1);
            match (removed[0], added[0]) {
                (Predicate::On(moved, _), Predicate::On(block, below)) => {
                    assert_eq!(moved, block);
                    assert!(below.is_table());
                }
                other => panic!("unexpected change {:?}", other),
            }
        }
    }

    #[test]
    fn successor_order_is_deterministic() {
        let generator = SuccessorGenerator::default();
        let current = state(&["ON C D", "ON A B", "CLEAR A", "CLEAR B", "CLEAR C", "CLEAR D"]);
        let first = generator.successors(&current);
        let second = generator.successors(&current);
        assert_eq!(first, second);
        assert!(first[0].contains(&Predicate::on("A", "TABLE")));
        assert!(first[1].contains(&Predicate::on("C", "TABLE")));
    }

    #[test]
    fn empty_without_applicable_actions() {
        let generator = SuccessorGenerator::default();
        assert!(generator.successors(&state(&["ON A B", "CLEAR A"])).is_empty());
    }
}
