use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: u64,
    /// Number of expansions of a state that had already been expanded
    reexpanded_nodes: u64,
    /// Number of successor states generated
    generated_nodes: u64,
    /// Number of successors dropped because they were visited already
    pruned_nodes: u64,
    /// Number of heuristic evaluations
    evaluated_nodes: u64,
    /// Number of states pushed again with a strictly better cost
    reopened_nodes: u64,
    /// Largest frontier size seen during the search
    peak_frontier_size: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            reexpanded_nodes: 0,
            generated_nodes: 0,
            pruned_nodes: 0,
            evaluated_nodes: 0,
            reopened_nodes: 0,
            peak_frontier_size: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_reexpanded_nodes(&mut self) {
        self.reexpanded_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as u64;
    }

    pub fn increment_pruned_nodes(&mut self, num_nodes: usize) {
        self.pruned_nodes += num_nodes as u64;
    }

    pub fn increment_evaluated_nodes(&mut self, num_nodes: usize) {
        self.evaluated_nodes += num_nodes as u64;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }

    pub fn register_frontier_size(&mut self, size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(size);
    }

    pub fn expanded_nodes(&self) -> u64 {
        self.expanded_nodes
    }

    pub fn reexpanded_nodes(&self) -> u64 {
        self.reexpanded_nodes
    }

    pub fn generated_nodes(&self) -> u64 {
        self.generated_nodes
    }

    pub fn pruned_nodes(&self) -> u64 {
        self.pruned_nodes
    }

    pub fn evaluated_nodes(&self) -> u64 {
        self.evaluated_nodes
    }

    pub fn reopened_nodes(&self) -> u64 {
        self.reopened_nodes
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            reexpanded_nodes = self.reexpanded_nodes,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            evaluated_nodes = self.evaluated_nodes,
            reopened_nodes = self.reopened_nodes,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        let memory_usage_mb = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        info!(
            search_duration = %humantime::format_duration(self.search_start_time.elapsed()),
            memory_usage_mb = memory_usage_mb,
        );
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
