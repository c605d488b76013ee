//! This module implements the greedy best-first search algorithm.

use crate::search::{
    search_engines::{PriorityFrontier, SearchEngine, SearchResult, SearchStatistics},
    Heuristic, State, SuccessorGenerator, Task,
};
use std::collections::HashSet;
use tracing::debug;

/// Greedy best-first search. The frontier is ordered by heuristic value
/// alone, path cost is ignored.
#[derive(Debug, Default)]
pub struct GBFS {}

impl GBFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for GBFS {
    fn search(
        &mut self,
        task: &Task,
        generator: &SuccessorGenerator,
        heuristic: &mut dyn Heuristic,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut frontier = PriorityFrontier::new();
        let mut visited: HashSet<State> = HashSet::new();

        let initial_h = heuristic.evaluate(task.initial_state(), task.goal());
        statistics.increment_evaluated_nodes(1);
        frontier.push(initial_h, 0, task.initial_state().clone());

        while let Some((_, state)) = frontier.pop() {
            if task.goal().is_satisfied(&state) {
                statistics.finalise_search();
                return (SearchResult::Success(state), statistics);
            }

            if !visited.insert(state.clone()) {
                statistics.increment_reexpanded_nodes();
            }
            statistics.increment_expanded_nodes();

            let successors = generator.successors(&state);
            let num_successors = successors.len();
            statistics.increment_generated_nodes(num_successors);
            debug!(state = %state, successors = num_successors, "expanding");

            let new_states: Vec<State> = successors
                .into_iter()
                .filter(|successor| !visited.contains(successor))
                .collect();
            statistics.increment_pruned_nodes(num_successors - new_states.len());

            let h_values = heuristic.evaluate_batch(&new_states, task.goal());
            statistics.increment_evaluated_nodes(new_states.len());
            for (successor, h_value) in new_states.into_iter().zip(h_values) {
                frontier.push(h_value, 0, successor);
            }
            statistics.register_frontier_size(frontier.len());
        }

        statistics.finalise_search();
        (SearchResult::NoSolution, statistics)
    }
}
