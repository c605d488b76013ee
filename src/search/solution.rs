//! Text rendering of a search outcome, as written to the output file.

use crate::search::State;
use itertools::Itertools;

pub const SOLUTION_HEADER: &str = "Solution:";
pub const NO_SOLUTION: &str = "No solution found.";

/// Render the state found by a search, one predicate per line after a
/// `Solution:` header, or the no-solution message when there is none.
pub fn render_solution(solution: Option<&State>) -> String {
    match solution {
        Some(state) => format!(
            "{}\n{}",
            SOLUTION_HEADER,
            state.iter().map(|predicate| format!("{}\n", predicate)).join("")
        ),
        None => NO_SOLUTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::state;

    #[test]
    fn renders_one_predicate_per_line() {
        let solution = state(&["ON A TABLE", "CLEAR B", "CLEAR A"]);
        assert_eq!(
            render_solution(Some(&solution)),
            "Solution:\nCLEAR A\nCLEAR B\nON A TABLE\n"
        );
    }

    #[test]
    fn empty_state_is_still_a_solution() {
        assert_eq!(render_solution(Some(&State::default())), "Solution:\n");
    }

    #[test]
    fn no_solution_has_no_trailing_newline() {
        assert_eq!(render_solution(None), "No solution found.");
    }
}
