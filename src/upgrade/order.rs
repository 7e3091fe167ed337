//! Repository-priority ordering of upgrade records

use std::cmp::Ordering;

use tracing::debug;

use crate::upgrade::types::{UpgradeList, UpgradeRecord};

/// Compare two strings by Unicode code point sequence
fn compare_code_points(a: &str, b: &str) -> Ordering {
    a.chars().cmp(b.chars())
}

/// Compare two upgrade records for listing order
///
/// Records from the same repository are ordered by name. Otherwise the
/// repository appearing first in `repositories` wins; repositories absent from
/// `repositories` are ordered by name.
pub fn compare_upgrades(
    a: &UpgradeRecord,
    b: &UpgradeRecord,
    repositories: &[String],
) -> Ordering {
    if a.repository == b.repository {
        return compare_code_points(&a.name, &b.name);
    }

    for repository in repositories {
        if *repository == a.repository {
            return Ordering::Less;
        }
        if *repository == b.repository {
            return Ordering::Greater;
        }
    }

    compare_code_points(&a.repository, &b.repository)
}

/// Stable in-place sort of `upgrades` by repository priority, then name
pub fn sort_upgrades(upgrades: &mut [UpgradeRecord], repositories: &[String]) {
    debug!(
        "Sorting {} upgrades with repository priority {:?}",
        upgrades.len(),
        repositories
    );
    upgrades.sort_by(|a, b| compare_upgrades(a, b, repositories));
}

/// Return the upgrades of `list` in listing order, leaving `list` untouched
pub fn order(list: &UpgradeList) -> Vec<UpgradeRecord> {
    let mut upgrades = list.upgrades.clone();
    sort_upgrades(&mut upgrades, &list.repositories);
    upgrades
}
