//! Sources supplying the list of pending upgrades

#[cfg(test)]
use mockall::automock;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::upgrade::error::SourceError;
use crate::upgrade::filter::Filter;
use crate::upgrade::types::UpgradeList;

/// Trait for loading the upgrade list and repository priority
#[cfg_attr(test, automock)]
pub trait UpgradeSource {
    /// Load the pending upgrades
    ///
    /// # Returns
    /// * `Ok(UpgradeList)` - Upgrades in source order, with repository priority
    /// * `Err(SourceError)` - If reading or decoding fails
    fn load(&self) -> Result<UpgradeList, SourceError>;
}

/// Where a [`JsonSource`] reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonInput {
    File(PathBuf),
    Stdin,
}

/// Reads an upgrade list encoded as JSON
///
/// ```json
/// {
///   "repositories": ["core", "extra"],
///   "upgrades": [
///     { "name": "linux", "repository": "core", "localVersion": "6.1.1", "remoteVersion": "6.1.2" }
///   ]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonSource {
    input: JsonInput,
}

impl JsonSource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            input: JsonInput::File(path.as_ref().to_path_buf()),
        }
    }

    pub fn stdin() -> Self {
        Self {
            input: JsonInput::Stdin,
        }
    }

    pub fn input(&self) -> &JsonInput {
        &self.input
    }
}

impl UpgradeSource for JsonSource {
    fn load(&self) -> Result<UpgradeList, SourceError> {
        match &self.input {
            JsonInput::File(path) => {
                debug!("Reading upgrade list from {:?}", path);
                read_upgrade_list(BufReader::new(File::open(path)?))
            }
            JsonInput::Stdin => {
                debug!("Reading upgrade list from stdin");
                read_upgrade_list(std::io::stdin().lock())
            }
        }
    }
}

/// Load upgrades from `source`, drop those rejected by `filter` and sort the rest
///
/// `repositories`, when given, replaces the priority supplied by the source.
pub fn load_sorted<S: UpgradeSource + ?Sized>(
    source: &S,
    filter: &dyn Filter,
    repositories: Option<Vec<String>>,
) -> Result<UpgradeList, SourceError> {
    let mut list = source.load()?;
    if let Some(repositories) = repositories {
        list.repositories = repositories;
    }

    let total = list.len();
    list.retain(filter);
    debug!("Kept {} of {} upgrades after filtering", list.len(), total);

    list.sort();
    Ok(list)
}

/// Decode and validate an upgrade list from any reader
pub fn read_upgrade_list<R: Read>(reader: R) -> Result<UpgradeList, SourceError> {
    let list: UpgradeList = serde_json::from_reader(reader)?;
    validate(&list)?;
    Ok(list)
}

fn validate(list: &UpgradeList) -> Result<(), SourceError> {
    let mut seen = HashSet::new();
    for (index, upgrade) in list.upgrades.iter().enumerate() {
        if upgrade.name.is_empty() {
            return Err(SourceError::InvalidRecord {
                index,
                reason: "empty package name".to_string(),
            });
        }

        if !seen.insert((upgrade.repository.as_str(), upgrade.name.as_str())) {
            warn!("Duplicate upgrade record for {}", upgrade.qualified_name());
        }
    }
    Ok(())
}
