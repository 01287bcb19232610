use std::collections::HashSet;

/// Set of package names recorded in a lockfile
///
/// Built once from the lock document and never mutated afterwards, so every
/// comparison runs against the same snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockIndex {
    names: HashSet<String>,
}

impl LockIndex {
    pub fn new(names: HashSet<String>) -> Self {
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for LockIndex {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
