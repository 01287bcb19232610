use std::collections::{BTreeMap, BTreeSet};

/// One package metadata file found while scanning the installation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageObservation {
    /// Declared `name`, or the directory name when the field is absent
    pub package_name: String,
    /// Keys of the `optionalDependencies` mapping
    pub optional_dependencies: BTreeSet<String>,
}

impl PackageObservation {
    pub fn new<I, S>(package_name: impl Into<String>, optional_dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            package_name: package_name.into(),
            optional_dependencies: optional_dependencies.into_iter().map(Into::into).collect(),
        }
    }
}

/// Optional dependency names keyed by the package that declares them
///
/// The same package name can be installed at several nested locations; their
/// declarations are merged into a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionalDependencyMap {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl OptionalDependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds scanner observations into a map, merging sets that share a package name
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = PackageObservation>,
    {
        observations
            .into_iter()
            .fold(Self::new(), |mut map, observation| {
                map.merge(observation);
                map
            })
    }

    pub fn merge(&mut self, observation: PackageObservation) {
        self.entries
            .entry(observation.package_name)
            .or_default()
            .extend(observation.optional_dependencies);
    }

    pub fn get(&self, package_name: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(package_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }

    /// Number of distinct package names seen
    pub fn package_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of (package, optional dependency) pairs
    pub fn declaration_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_observations_merges_same_package() {
        let map = OptionalDependencyMap::from_observations(vec![
            PackageObservation::new("X", ["A"]),
            PackageObservation::new("Y", Vec::<String>::new()),
            PackageObservation::new("X", ["B"]),
        ]);

        let x = map.get("X").unwrap();
        assert_eq!(x.len(), 2);
        assert!(x.contains("A"));
        assert!(x.contains("B"));
        assert_eq!(map.package_count(), 2);
        assert_eq!(map.declaration_count(), 2);
    }

    #[test]
    fn test_package_without_optional_dependencies_has_empty_entry() {
        let map = OptionalDependencyMap::from_observations(vec![PackageObservation::new(
            "lodash",
            Vec::<String>::new(),
        )]);
        assert!(map.get("lodash").unwrap().is_empty());
        assert_eq!(map.declaration_count(), 0);
    }

    #[test]
    fn test_merge_deduplicates_dependency_names() {
        let mut map = OptionalDependencyMap::new();
        map.merge(PackageObservation::new("esbuild", ["@esbuild/linux-x64"]));
        map.merge(PackageObservation::new("esbuild", ["@esbuild/linux-x64"]));
        assert_eq!(map.declaration_count(), 1);
    }

    #[test]
    fn test_from_no_observations_is_empty() {
        let map = OptionalDependencyMap::from_observations(Vec::new());
        assert_eq!(map, OptionalDependencyMap::new());
        assert_eq!(map.iter().count(), 0);
    }
}
