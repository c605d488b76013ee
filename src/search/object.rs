use internment::Intern;
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
};

/// The name reserved for the table every block can be put down on.
pub const TABLE: &str = "TABLE";

/// An object of the blocks world, i.e. a block or the table. Objects are
/// interned, so copying, hashing and comparing them for equality is cheap.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Object(Intern<String>);

impl Object {
    /// Create an object from its name. Names are normalised to uppercase.
    pub fn new(name: &str) -> Self {
        Self(Intern::new(name.to_uppercase()))
    }

    pub fn table() -> Self {
        Self::new(TABLE)
    }

    pub fn is_table(&self) -> bool {
        self.as_str() == TABLE
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

// Interned values are ordered by content so that iteration over sorted
// collections does not depend on allocation addresses.
impl Ord for Object {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Object {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for Object {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// This custom implementation hides the internment details from the user.
impl Debug for Object {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_uppercased() {
        assert_eq!(Object::new("b1"), Object::new("B1"));
        assert_eq!(Object::new("b1").as_str(), "B1");
    }

    #[test]
    fn table_is_recognised() {
        assert!(Object::table().is_table());
        assert!(Object::new("table").is_table());
        assert!(!Object::new("A").is_table());
    }

    #[test]
    fn ordering_follows_names() {
        let mut objects = vec![Object::new("c"), Object::new("a"), Object::new("b")];
        objects.sort();
        assert_eq!(
            objects,
            vec![Object::new("a"), Object::new("b"), Object::new("c")]
        );
    }
}
