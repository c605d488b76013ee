mod action_rule;
mod successor_generator;
mod unstack_to_table;

pub use action_rule::ActionRule;
pub use successor_generator::{SuccessorGenerator, SuccessorGeneratorName};
pub use unstack_to_table::UnstackToTable;
