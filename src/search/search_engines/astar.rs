//! This module implements the A* search algorithm.

use crate::search::{
    search_engines::{Cost, PriorityFrontier, SearchEngine, SearchResult, SearchStatistics},
    Heuristic, State, SuccessorGenerator, Task,
};
use std::collections::HashMap;
use tracing::{debug, trace};

/// A* search with unit action costs. The frontier is ordered by `g + h`.
///
/// Instead of a closed list the search keeps the best known cost of every
/// state it has seen. A successor is queued if it is new or if it was reached
/// with a strictly smaller cost than recorded; the cost of a popped state is
/// recorded as the cost it was popped with.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        task: &Task,
        generator: &SuccessorGenerator,
        heuristic: &mut dyn Heuristic,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut frontier = PriorityFrontier::new();
        let mut costs: HashMap<State, Cost> = HashMap::new();

        let initial_h = heuristic.evaluate(task.initial_state(), task.goal());
        statistics.increment_evaluated_nodes(1);
        frontier.push(initial_h, 0, task.initial_state().clone());

        while let Some((g_value, state)) = frontier.pop() {
            if task.goal().is_satisfied(&state) {
                statistics.finalise_search();
                return (SearchResult::Success(state), statistics);
            }

            costs.insert(state.clone(), g_value);
            statistics.increment_expanded_nodes();

            let successors = generator.successors(&state);
            statistics.increment_generated_nodes(successors.len());
            debug!(state = %state, g = g_value, successors = successors.len(), "expanding");

            let new_cost = g_value + 1;
            for successor in successors {
                match costs.get(&successor) {
                    None => {}
                    Some(&known_cost) if new_cost < known_cost => {
                        statistics.increment_reopened_nodes();
                    }
                    Some(_) => {
                        statistics.increment_pruned_nodes(1);
                        continue;
                    }
                }
                let h_value = heuristic.evaluate(&successor, task.goal());
                statistics.increment_evaluated_nodes(1);
                trace!(successor = %successor, g = new_cost, h = h_value, "queueing");
                frontier.push(new_cost + h_value, new_cost, successor.clone());
                costs.insert(successor, new_cost);
            }
            statistics.register_frontier_size(frontier.len());
        }

        statistics.finalise_search();
        (SearchResult::NoSolution, statistics)
    }
}
