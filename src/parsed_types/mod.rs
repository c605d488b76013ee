//! Types produced by the problem file parser.

mod problem;

pub use problem::Problem;
