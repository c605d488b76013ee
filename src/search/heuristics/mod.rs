mod goal_counting;
mod heuristic;
mod zero_heuristic;

pub use goal_counting::GoalCounting;
pub use heuristic::{Heuristic, HeuristicValue, StateHeuristicNames};
pub use zero_heuristic::ZeroHeuristic;
