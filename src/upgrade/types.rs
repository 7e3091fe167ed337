//! Common types for upgrade listings

use serde::Deserialize;

use crate::upgrade::filter::Filter;
use crate::upgrade::order::sort_upgrades;

/// A single package with a pending upgrade
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRecord {
    /// Package name (e.g., "linux")
    pub name: String,
    /// Repository the upgrade comes from (e.g., "core")
    pub repository: String,
    /// Currently installed version
    pub local_version: String,
    /// Version available in the repository
    pub remote_version: String,
}

impl UpgradeRecord {
    pub fn new(
        name: impl Into<String>,
        repository: impl Into<String>,
        local_version: impl Into<String>,
        remote_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            repository: repository.into(),
            local_version: local_version.into(),
            remote_version: remote_version.into(),
        }
    }

    /// Returns "repository/name" as shown in listings
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.repository, self.name)
    }
}

/// Upgrades plus the repository priority used to order them
///
/// `repositories` is the user's repository search order: earlier entries
/// sort first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpgradeList {
    pub upgrades: Vec<UpgradeRecord>,
    pub repositories: Vec<String>,
}

impl UpgradeList {
    pub fn new(upgrades: Vec<UpgradeRecord>, repositories: Vec<String>) -> Self {
        Self {
            upgrades,
            repositories,
        }
    }

    pub fn len(&self) -> usize {
        self.upgrades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upgrades.is_empty()
    }

    /// Stable in-place sort by repository priority, then name
    pub fn sort(&mut self) {
        sort_upgrades(&mut self.upgrades, &self.repositories);
    }

    /// Keep only the records accepted by `filter`
    pub fn retain(&mut self, filter: &dyn Filter) {
        self.upgrades.retain(|upgrade| filter.accepts(upgrade));
    }
}
