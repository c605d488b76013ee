//! This module contains the definition of a search state. A state is a set of
//! predicates; the predicates are kept in a [`BTreeSet`] so that the set
//! itself is the canonical form of the state: two states built from the same
//! predicates in any order are equal and hash identically.

use crate::search::Predicate;
use itertools::Itertools;
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct State {
    predicates: BTreeSet<Predicate>,
}

impl State {
    pub fn new(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Self {
            predicates: predicates.into_iter().collect(),
        }
    }

    pub fn contains(&self, predicate: &Predicate) -> bool {
        self.predicates.contains(predicate)
    }

    /// Iterate over the predicates in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter()
    }

    /// All `ON` predicates of the state, in canonical order.
    pub fn on_relations(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter().filter(|predicate| predicate.is_on())
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns true if every predicate of `self` is also in `other`.
    pub fn is_subset(&self, other: &State) -> bool {
        self.predicates.is_subset(&other.predicates)
    }

    /// Number of predicates of `self` that are missing from `other`.
    pub fn count_missing_from(&self, other: &State) -> usize {
        self.predicates.difference(&other.predicates).count()
    }

    /// Build the state reached by deleting `removed` and adding `added`. The
    /// receiver is left untouched.
    pub fn with_replaced(&self, removed: &Predicate, added: Predicate) -> Self {
        let mut predicates = self.predicates.clone();
        predicates.remove(removed);
        predicates.insert(added);
        Self { predicates }
    }
}

impl FromIterator<Predicate> for State {
    fn from_iter<T: IntoIterator<Item = Predicate>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = &'a Predicate;
    type IntoIter = std::collections::btree_set::Iter<'a, Predicate>;

    fn into_iter(self) -> Self::IntoIter {
        self.predicates.iter()
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.predicates.iter().join(", "))
    }
}
