//! Filters deciding which upgrade records are listed

use std::collections::HashSet;

use crate::upgrade::types::UpgradeRecord;

/// Decides whether an upgrade record should be included in the listing
pub trait Filter {
    fn accepts(&self, upgrade: &UpgradeRecord) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&UpgradeRecord) -> bool,
{
    fn accepts(&self, upgrade: &UpgradeRecord) -> bool {
        self(upgrade)
    }
}

/// Accepts only records from the given repositories
///
/// An empty repository set accepts everything.
#[derive(Debug, Clone, Default)]
pub struct RepositoryFilter {
    repositories: HashSet<String>,
}

impl RepositoryFilter {
    pub fn new<I, S>(repositories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            repositories: repositories.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for RepositoryFilter {
    fn accepts(&self, upgrade: &UpgradeRecord) -> bool {
        self.repositories.is_empty() || self.repositories.contains(&upgrade.repository)
    }
}

/// Rejects records whose package name is ignored
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    names: HashSet<String>,
}

impl IgnoreFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for IgnoreFilter {
    fn accepts(&self, upgrade: &UpgradeRecord) -> bool {
        !self.names.contains(&upgrade.name)
    }
}

/// Accepts a record only when every inner filter accepts it
#[derive(Default)]
pub struct AllOf {
    filters: Vec<Box<dyn Filter>>,
}

impl AllOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }
}

impl Filter for AllOf {
    fn accepts(&self, upgrade: &UpgradeRecord) -> bool {
        self.filters.iter().all(|filter| filter.accepts(upgrade))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upgrade::types::UpgradeList;
    use rstest::rstest;

    fn record(repository: &str, name: &str) -> UpgradeRecord {
        UpgradeRecord::new(name, repository, "1", "2")
    }

    #[rstest]
    #[case(&[], "core", true)]
    #[case(&["core"], "core", true)]
    #[case(&["core", "extra"], "extra", true)]
    #[case(&["core"], "aur", false)]
    fn repository_filter_accepts_expected(
        #[case] repositories: &[&str],
        #[case] repository: &str,
        #[case] expected: bool,
    ) {
        let filter = RepositoryFilter::new(repositories.iter().copied());
        assert_eq!(filter.accepts(&record(repository, "vim")), expected);
    }

    #[rstest]
    #[case(&[], "vim", true)]
    #[case(&["linux"], "vim", true)]
    #[case(&["linux", "vim"], "vim", false)]
    fn ignore_filter_accepts_expected(
        #[case] names: &[&str],
        #[case] name: &str,
        #[case] expected: bool,
    ) {
        let filter = IgnoreFilter::new(names.iter().copied());
        assert_eq!(filter.accepts(&record("core", name)), expected);
    }

    #[test]
    fn all_of_requires_every_filter() {
        let filter = AllOf::new()
            .with(RepositoryFilter::new(["core"]))
            .with(IgnoreFilter::new(["linux"]));

        assert!(filter.accepts(&record("core", "glibc")));
        assert!(!filter.accepts(&record("core", "linux")));
        assert!(!filter.accepts(&record("extra", "glibc")));
    }

    #[test]
    fn all_of_without_filters_accepts_everything() {
        assert!(AllOf::new().accepts(&record("aur", "yay")));
    }

    #[test]
    fn retain_applies_closure_filter() {
        let mut list = UpgradeList::new(
            vec![record("core", "linux"), record("aur", "yay")],
            vec![],
        );

        list.retain(&|upgrade: &UpgradeRecord| upgrade.repository != "aur");

        assert_eq!(list.upgrades, vec![record("core", "linux")]);
    }
}
