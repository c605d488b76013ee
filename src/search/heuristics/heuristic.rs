use crate::search::heuristics::{GoalCounting, ZeroHeuristic};
use crate::search::{Goal, State};
use std::fmt::Debug;

/// Estimated number of actions still needed to reach the goal.
pub type HeuristicValue = u32;

pub trait Heuristic: Debug {
    /// Evaluate the given state with respect to the given goal.
    fn evaluate(&mut self, state: &State, goal: &Goal) -> HeuristicValue;

    /// Evaluate a batch of states with respect to the given goal. The default
    /// implementation simply calls `evaluate` for each state sequentially. This
    /// method should be overridden if a more efficient implementation is
    /// possible.
    fn evaluate_batch(&mut self, states: &[State], goal: &Goal) -> Vec<HeuristicValue> {
        states
            .iter()
            .map(|state| self.evaluate(state, goal))
            .collect()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum StateHeuristicNames {
    #[default]
    #[clap(help = "The goal counting heuristic.")]
    GoalCounting,
    #[clap(name = "zero", help = "The zero heuristic.")]
    ZeroHeuristic,
}

impl StateHeuristicNames {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            StateHeuristicNames::GoalCounting => Box::new(GoalCounting::new()),
            StateHeuristicNames::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
