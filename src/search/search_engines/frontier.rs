//! Open lists used by the search engines.
//!
//! The blind engines use a plain queue or stack of states. The informed
//! engines use [`PriorityFrontier`], a min-priority queue that breaks ties
//! between equal keys by insertion order.

use crate::search::State;
use priority_queue::PriorityQueue;
use std::{
    cmp::Reverse,
    collections::{HashMap, VecDeque},
    fmt::Debug,
};

/// Accumulated path cost, in number of actions.
pub type Cost = u32;

/// An open list of states for the uninformed engines.
pub trait Frontier: Debug + Default {
    fn push(&mut self, state: State);

    fn pop(&mut self) -> Option<State>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<State>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, state: State) {
        self.queue.push_back(state);
    }

    fn pop(&mut self) -> Option<State> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<State>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, state: State) {
        self.stack.push(state);
    }

    fn pop(&mut self) -> Option<State> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Unique, monotonically increasing identifier of a frontier entry. It doubles
/// as the tie-breaker between entries with the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

#[derive(Debug)]
struct FrontierEntry {
    g: Cost,
    state: State,
}

/// Min-priority open list. Entries with the smallest key are popped first;
/// among equal keys the earliest pushed entry wins. The same state may be
/// pushed several times, each copy is a separate entry.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<EntryId, Reverse<(Cost, EntryId)>>,
    entries: HashMap<EntryId, FrontierEntry>,
    next_id: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: Cost, g: Cost, state: State) {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, FrontierEntry { g, state });
        self.queue.push(id, Reverse((key, id)));
    }

    /// Remove the best entry, returning its accumulated cost and state.
    pub fn pop(&mut self) -> Option<(Cost, State)> {
        let (id, _) = self.queue.pop()?;
        let entry = self
            .entries
            .remove(&id)
            .expect("queued entry without payload");
        Some((entry.g, entry.state))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
