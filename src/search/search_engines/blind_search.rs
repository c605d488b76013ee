//! Uninformed search: breadth-first and depth-first search share the same
//! loop and differ only in the order in which the frontier hands out states.

use crate::search::{
    search_engines::{
        FifoFrontier, Frontier, LifoFrontier, SearchEngine, SearchResult, SearchStatistics,
    },
    Heuristic, State, SuccessorGenerator, Task,
};
use std::{collections::HashSet, marker::PhantomData};
use tracing::debug;

#[derive(Debug)]
pub struct BlindSearch<F: Frontier> {
    frontier: PhantomData<F>,
}

/// Breadth first search
pub type BFS = BlindSearch<FifoFrontier>;

/// Depth first search
pub type DFS = BlindSearch<LifoFrontier>;

impl<F: Frontier> BlindSearch<F> {
    pub fn new() -> Self {
        Self {
            frontier: PhantomData,
        }
    }
}

impl<F: Frontier> Default for BlindSearch<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Frontier> SearchEngine for BlindSearch<F> {
    fn search(
        &mut self,
        task: &Task,
        generator: &SuccessorGenerator,
        _heuristic: &mut dyn Heuristic,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut frontier = F::default();
        let mut visited: HashSet<State> = HashSet::new();
        frontier.push(task.initial_state().clone());

        while let Some(state) = frontier.pop() {
            if task.goal().is_satisfied(&state) {
                statistics.finalise_search();
                return (SearchResult::Success(state), statistics);
            }

            // States are only marked as visited once expanded, so a state can
            // sit in the frontier more than once and get expanded again.
            if !visited.insert(state.clone()) {
                statistics.increment_reexpanded_nodes();
            }
            statistics.increment_expanded_nodes();

            let successors = generator.successors(&state);
            statistics.increment_generated_nodes(successors.len());
            debug!(state = %state, successors = successors.len(), "expanding");

            for successor in successors {
                if visited.contains(&successor) {
                    statistics.increment_pruned_nodes(1);
                } else {
                    frontier.push(successor);
                }
            }
            statistics.register_frontier_size(frontier.len());
        }

        statistics.finalise_search();
        (SearchResult::NoSolution, statistics)
    }
}
