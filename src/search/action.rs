use crate::search::Object;
use std::fmt::{self, Display, Formatter};

/// A ground action, i.e. a single application of an action rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move `block` from `from` onto the table.
    UnstackToTable { block: Object, from: Object },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::UnstackToTable { .. } => "unstack-to-table",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Action::UnstackToTable { block, from } => {
                write!(f, "({} {} {})", self.name(), block, from)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_parenthesised() {
        let action = Action::UnstackToTable {
            block: Object::new("a"),
            from: Object::new("b"),
        };
        assert_eq!(action.to_string(), "(unstack-to-table A B)");
    }
}
