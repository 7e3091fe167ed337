//! Upgrade list fixtures

use std::io::Write;

use tempfile::NamedTempFile;

/// A pacman-like upgrade list with an unprioritized third-party repository
pub const UPGRADE_LIST: &str = r#"{
    "repositories": ["core", "extra"],
    "upgrades": [
        { "name": "yay", "repository": "aur", "localVersion": "12.0.5-1", "remoteVersion": "12.1.0-1" },
        { "name": "vim", "repository": "extra", "localVersion": "9.0.1000-1", "remoteVersion": "9.0.1200-1" },
        { "name": "linux", "repository": "core", "localVersion": "6.1.1.arch1-1", "remoteVersion": "6.1.2.arch1-1" },
        { "name": "firefox", "repository": "extra", "localVersion": "110.0beta2-1", "remoteVersion": "110.0beta3-1" },
        { "name": "glibc", "repository": "core", "localVersion": "2.36-6", "remoteVersion": "2.37-1" }
    ]
}"#;

/// Write `content` to a temporary JSON file
pub fn write_upgrade_list(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}
