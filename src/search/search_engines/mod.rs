mod astar;
mod blind_search;
mod frontier;
mod gbfs;
mod search_engine;
mod search_statistics;

pub use astar::AStar;
pub use blind_search::{BlindSearch, BFS, DFS};
pub use frontier::{Cost, EntryId, FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use gbfs::GBFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_statistics::SearchStatistics;
