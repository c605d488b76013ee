mod action;
mod goal;
pub mod heuristics;
mod object;
mod predicate;
pub mod search_engines;
mod solution;
pub mod states;
pub mod successor_generators;
mod task;
mod verbosity;

pub use action::Action;
pub use goal::Goal;
pub use heuristics::{GoalCounting, Heuristic, HeuristicValue, StateHeuristicNames, ZeroHeuristic};
pub use object::{Object, TABLE};
pub use predicate::{Predicate, PredicateError};
pub use search_engines::{
    AStar, SearchEngine, SearchEngineName, SearchResult, SearchStatistics, BFS, DFS, GBFS,
};
pub use solution::{render_solution, NO_SOLUTION, SOLUTION_HEADER};
pub use states::State;
pub use successor_generators::{
    ActionRule, SuccessorGenerator, SuccessorGeneratorName, UnstackToTable,
};
pub use task::{Task, TaskError};
pub use verbosity::Verbosity;
