//! Pending upgrade records and their ordering
//!
//! # Modules
//!
//! - [`types`]: `UpgradeRecord` and `UpgradeList`
//! - [`order`]: Repository-priority then name ordering
//! - [`filter`]: Predicates deciding which records are listed
//! - [`source`]: Trait and JSON implementation for loading upgrade lists
//! - [`error`]: Error types for loading upgrade lists

pub mod error;
pub mod filter;
pub mod order;
pub mod source;
pub mod types;

pub use types::{UpgradeList, UpgradeRecord};
