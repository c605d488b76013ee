use crate::search::{
    search_engines::{AStar, SearchStatistics, BFS, DFS, GBFS},
    Heuristic, State, SuccessorGenerator, Task,
};
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search reached a state satisfying the goal
    Success(State),
    /// The frontier ran empty before the goal was reached
    NoSolution,
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    /// The goal state, if one was found.
    pub fn into_state(self) -> Option<State> {
        match self {
            SearchResult::Success(state) => Some(state),
            SearchResult::NoSolution => None,
        }
    }
}

pub trait SearchEngine: Debug {
    fn search(
        &mut self,
        task: &Task,
        generator: &SuccessorGenerator,
        heuristic: &mut dyn Heuristic,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(
    clap::ValueEnum,
    strum_macros::Display,
    strum_macros::EnumIter,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
)]
pub enum SearchEngineName {
    #[clap(name = "breadth", help = "Uninformed breadth-first search.")]
    #[strum(serialize = "breadth")]
    BFS,
    #[clap(name = "depth", help = "Uninformed depth-first search.")]
    #[strum(serialize = "depth")]
    DFS,
    #[clap(
        name = "best",
        help = "Greedy best-first search, ordered by the heuristic value only."
    )]
    #[strum(serialize = "best")]
    GBFS,
    #[clap(
        name = "astar",
        help = "A* search, ordered by path cost plus heuristic value."
    )]
    #[strum(serialize = "astar")]
    AStar,
}

impl SearchEngineName {
    pub fn create(&self) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::BFS => Box::new(BFS::new()),
            SearchEngineName::DFS => Box::new(DFS::new()),
            SearchEngineName::GBFS => Box::new(GBFS::new()),
            SearchEngineName::AStar => Box::new(AStar::new()),
        }
    }

    /// Whether the engine consults the heuristic at all.
    pub fn is_informed(&self) -> bool {
        matches!(self, SearchEngineName::GBFS | SearchEngineName::AStar)
    }
}
