use crate::parsed_types::Problem;
use crate::parsers::{parse_problem, ParseError};
use crate::search::{
    heuristics::StateHeuristicNames,
    search_engines::{SearchEngineName, SearchResult, SearchStatistics},
    Goal, Heuristic, State, SuccessorGenerator,
};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to read problem file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse problem at line {line}, column {column}: unexpected input {found:?}")]
    Parse {
        line: usize,
        column: usize,
        found: String,
    },
}

impl TaskError {
    /// Locate the deepest failure of the parser in `text`.
    fn from_parse_error(text: &str, error: &ParseError) -> Self {
        let offset = nom_greedyerror::error_position(error)
            .unwrap_or(0)
            .min(text.len());
        let before = &text[..offset];
        let line = before.matches('\n').count() + 1;
        let column = before
            .rfind('\n')
            .map_or(before.chars().count(), |newline| {
                before[newline + 1..].chars().count()
            })
            + 1;
        let found = text[offset..]
            .split_whitespace()
            .next()
            .unwrap_or("end of input")
            .to_string();
        TaskError::Parse {
            line,
            column,
            found,
        }
    }
}

/// A search task: a start state and a (partial) goal. A task never checks
/// whether the goal mentions blocks that appear in the start state.
///
/// Every search method runs from scratch with its own frontier and
/// bookkeeping, so a task can be searched any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    initial_state: State,
    goal: Goal,
}

impl Task {
    pub fn new(initial_state: State, goal: impl Into<Goal>) -> Self {
        Self {
            initial_state,
            goal: goal.into(),
        }
    }

    pub fn from_problem(problem: &Problem) -> Self {
        Self::new(
            problem.init().iter().copied().collect(),
            problem.goal().iter().copied().collect::<State>(),
        )
    }

    pub fn from_path(problem_path: &Path) -> Result<Self, TaskError> {
        let problem_text = fs::read_to_string(problem_path).map_err(|source| TaskError::Io {
            path: problem_path.to_path_buf(),
            source,
        })?;
        Self::from_text(&problem_text)
    }

    pub fn from_text(problem_text: &str) -> Result<Self, TaskError> {
        match parse_problem(problem_text) {
            Ok((_, problem)) => {
                let task = Self::from_problem(&problem);
                info!(
                    initial_predicates = task.initial_state.len(),
                    goal_predicates = task.goal.state().len(),
                    "task loaded"
                );
                Ok(task)
            }
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
                Err(TaskError::from_parse_error(problem_text, &e))
            }
            Err(nom::Err::Incomplete(_)) => Err(TaskError::Parse {
                line: problem_text.lines().count().max(1),
                column: 1,
                found: "end of input".to_string(),
            }),
        }
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// Run the named search engine with the default successor generator and
    /// the goal counting heuristic.
    pub fn search(&self, engine: SearchEngineName) -> (SearchResult, SearchStatistics) {
        let mut heuristic = StateHeuristicNames::default().create();
        self.search_with(engine, &SuccessorGenerator::default(), heuristic.as_mut())
    }

    pub fn search_with(
        &self,
        engine: SearchEngineName,
        generator: &SuccessorGenerator,
        heuristic: &mut dyn Heuristic,
    ) -> (SearchResult, SearchStatistics) {
        info!(engine = %engine, "running search");
        engine.create().search(self, generator, heuristic)
    }

    pub fn breadth_first_search(&self) -> Option<State> {
        self.search(SearchEngineName::BFS).0.into_state()
    }

    pub fn depth_first_search(&self) -> Option<State> {
        self.search(SearchEngineName::DFS).0.into_state()
    }

    pub fn best_first_search(&self) -> Option<State> {
        self.search(SearchEngineName::GBFS).0.into_state()
    }

    pub fn astar_search(&self) -> Option<State> {
        self.search(SearchEngineName::AStar).0.into_state()
    }
}
