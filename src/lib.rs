//! Ordered, diff-highlighted listing of pending package upgrades
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│   Upgrade   │────▶│   Render    │
//! │   (load)    │     │(filter/sort)│     │   (print)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │    Diff     │
//!                                         │ (highlight) │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`upgrade`]: Upgrade records, repository-priority ordering and filters
//! - [`diff`]: Version diff highlighting
//! - [`render`]: Styling and aligned listing output
//! - [`config`]: User configuration and well-known paths
//! - [`logging`]: `tracing` subscriber setup

pub mod config;
pub mod diff;
pub mod logging;
pub mod render;
pub mod upgrade;
