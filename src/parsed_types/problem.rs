//! Contains the [`Problem`] type.

use crate::search::Predicate;

/// A parsed problem file: the predicates listed in the `:INIT` and `:GOAL`
/// sections, in file order and possibly with repetitions.
///
/// ## Example
/// ```
/// # use bwsearch::parsers::Parser;
/// # use bwsearch::parsed_types::Problem;
/// # use bwsearch::search::Predicate;
/// let input = r#"
///     :INIT
///     (ON A B)
///     (CLEAR A)
///     (CLEAR B)
///     :GOAL
///     (ON A TABLE)
///     )
/// "#;
///
/// let problem = Problem::from_str(input).unwrap();
///
/// assert_eq!(problem.init().len(), 3);
/// assert_eq!(problem.goal(), &[Predicate::on("A", "TABLE")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// The initial state definition.
    init: Vec<Predicate>,
    /// The goal definition.
    goal: Vec<Predicate>,
}

impl Problem {
    pub const fn new(init: Vec<Predicate>, goal: Vec<Predicate>) -> Self {
        Self { init, goal }
    }

    pub fn init(&self) -> &[Predicate] {
        &self.init
    }

    pub fn goal(&self) -> &[Predicate] {
        &self.goal
    }
}
