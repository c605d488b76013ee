use crate::search::{Goal, State, SuccessorGenerator, Task};
use std::collections::HashSet;

pub const TOWER_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocksworld/tower.bw"
));

pub const DEEP_TOWER_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocksworld/deep_tower.bw"
));

pub const STACKS_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocksworld/stacks.bw"
));

const TOWER_INIT: [&str; 7] = [
    "ON A B", "ON B C", "ON C D", "CLEAR A", "CLEAR B", "CLEAR C", "CLEAR D",
];

/// Build a state from predicate strings such as `"ON A B"`.
pub fn state(predicates: &[&str]) -> State {
    predicates
        .iter()
        .map(|predicate| predicate.parse().unwrap())
        .collect()
}

/// The task of `benchmarks/blocksworld/tower.bw`.
pub fn tower_task() -> Task {
    tower_task_with_goal(&["ON A TABLE", "ON B TABLE"])
}

pub fn tower_task_with_goal(goal: &[&str]) -> Task {
    Task::new(state(&TOWER_INIT), state(goal))
}

/// The task of `benchmarks/blocksworld/deep_tower.bw`.
pub fn deep_tower_task() -> Task {
    Task::new(
        state(&[
            "ON A B", "ON B C", "ON C D", "ON D E", "ON E F", "ON F TABLE", "CLEAR A", "CLEAR B",
            "CLEAR C", "CLEAR D", "CLEAR E", "CLEAR F", "CLEAR TABLE",
        ]),
        state(&["ON A TABLE", "ON C TABLE", "ON E TABLE"]),
    )
}

/// The task of `benchmarks/blocksworld/stacks.bw`.
pub fn stacks_task() -> Task {
    Task::new(
        state(&[
            "ON A B", "ON B TABLE", "ON C D", "ON D E", "ON E TABLE", "CLEAR A", "CLEAR B",
            "CLEAR C", "CLEAR D", "CLEAR E",
        ]),
        state(&["ON A TABLE", "ON C TABLE", "ON D TABLE", "ON E TABLE"]),
    )
}

/// C sits on A, and the goal asks for a tower A-B-C, which no sequence of
/// moves to the table can build.
pub fn sussman_task() -> Task {
    Task::new(
        state(&["ON C A", "ON A TABLE", "ON B TABLE", "CLEAR C", "CLEAR B"]),
        Goal::new(state(&["ON A B", "ON B C"])),
    )
}

/// Breadth-first layers of the reachable state space, computed independently
/// of the search engines.
fn layers(task: &Task) -> Vec<Vec<State>> {
    let generator = SuccessorGenerator::default();
    let mut seen: HashSet<State> = HashSet::from([task.initial_state().clone()]);
    let mut layers = vec![vec![task.initial_state().clone()]];
    loop {
        let next: Vec<State> = layers
            .last()
            .unwrap()
            .iter()
            .flat_map(|state| generator.successors(state))
            .filter(|successor| seen.insert(successor.clone()))
            .collect();
        if next.is_empty() {
            return layers;
        }
        layers.push(next);
    }
}

/// Minimal number of actions from the start of `task` to `target`.
pub fn distance_from_start(task: &Task, target: &State) -> Option<usize> {
    layers(task)
        .iter()
        .position(|layer| layer.contains(target))
}

/// Minimal number of actions from the start of `task` to any goal state.
pub fn shortest_goal_distance(task: &Task) -> Option<usize> {
    layers(task)
        .iter()
        .position(|layer| layer.iter().any(|state| task.goal().is_satisfied(state)))
}
