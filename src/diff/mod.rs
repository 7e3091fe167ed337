//! Version diff highlighting
//!
//! Given the installed and available version strings of a package, decides
//! which parts of each string are shown as changed. The unchanged prefix is
//! left plain; from the start of the first differing component onward, every
//! alphanumeric run is marked and separators stay plain.
//!
//! ```
//! use upgrade_render::diff::{Change, diff};
//!
//! let (old, new) = diff("1.2.3", "1.2.4");
//! assert_eq!(old.unchanged(), "1.2.");
//! assert_eq!(old.highlighted(), "3");
//! assert_eq!(new.highlighted(), "4");
//! assert_eq!(new.segments().last().and_then(|s| s.change), Some(Change::Added));
//! ```
//!
//! # Modules
//!
//! - [`highlight`]: Divergence detection, component backtracking and segmentation
//! - [`types`]: `MarkedVersion` and its segments

pub mod highlight;
pub mod types;

pub use highlight::{PRERELEASE_MARKERS, diff, divergence_point};
pub use types::{Change, MarkedVersion, Segment};
