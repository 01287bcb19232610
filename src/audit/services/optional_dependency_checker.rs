use crate::audit::domain::{LockIndex, MissingOptionalDependency, OptionalDependencyMap};

/// OptionalDependencyChecker service for comparing declarations against the lockfile
///
/// Each (package, optional dependency) pair is checked independently. Findings
/// are handed to the caller as soon as they are found so they can be streamed
/// to the user, and are also returned for the final summary.
pub struct OptionalDependencyChecker;

impl OptionalDependencyChecker {
    pub fn check<F>(
        declared: &OptionalDependencyMap,
        lock_index: &LockIndex,
        mut on_missing: F,
    ) -> Vec<MissingOptionalDependency>
    where
        F: FnMut(&MissingOptionalDependency),
    {
        let mut missing = Vec::new();

        for (package, dependencies) in declared.iter() {
            for dependency in dependencies {
                if lock_index.contains(dependency) {
                    continue;
                }
                let finding = MissingOptionalDependency::new(package.as_str(), dependency.as_str());
                on_missing(&finding);
                missing.push(finding);
            }
        }

        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::domain::PackageObservation;

    fn lock_index(names: &[&str]) -> LockIndex {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_reports_missing_platform_binary() {
        let declared = OptionalDependencyMap::from_observations(vec![PackageObservation::new(
            "@swc/core",
            ["@swc/core-darwin-arm64"],
        )]);
        let index = lock_index(&["@swc/core"]);

        let mut streamed = Vec::new();
        let missing =
            OptionalDependencyChecker::check(&declared, &index, |m| streamed.push(m.clone()));

        assert_eq!(
            missing,
            vec![MissingOptionalDependency::new("@swc/core", "@swc/core-darwin-arm64")]
        );
        assert_eq!(streamed, missing);
    }

    #[test]
    fn test_all_present_yields_no_findings() {
        let declared = OptionalDependencyMap::from_observations(vec![
            PackageObservation::new("esbuild", ["@esbuild/linux-x64", "@esbuild/darwin-arm64"]),
            PackageObservation::new("lodash", Vec::<String>::new()),
        ]);
        let index = lock_index(&["esbuild", "@esbuild/linux-x64", "@esbuild/darwin-arm64"]);

        let missing = OptionalDependencyChecker::check(&declared, &index, |_| {
            panic!("nothing should be reported")
        });
        assert!(missing.is_empty());
    }

    #[test]
    fn test_empty_index_reports_every_declaration() {
        let declared = OptionalDependencyMap::from_observations(vec![
            PackageObservation::new("a", ["x", "y"]),
            PackageObservation::new("b", ["z"]),
        ]);

        let missing = OptionalDependencyChecker::check(&declared, &LockIndex::default(), |_| {});
        assert_eq!(missing.len(), 3);
    }

    #[test]
    fn test_check_is_idempotent() {
        let declared = OptionalDependencyMap::from_observations(vec![
            PackageObservation::new("fsevents-user", ["fsevents"]),
            PackageObservation::new("sharp", ["@img/sharp-linux-x64", "@img/sharp-win32-x64"]),
        ]);
        let index = lock_index(&["@img/sharp-linux-x64"]);

        let first = OptionalDependencyChecker::check(&declared, &index, |_| {});
        let second = OptionalDependencyChecker::check(&declared, &index, |_| {});
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
