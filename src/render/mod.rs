//! Presentation of ordered upgrade lists
//!
//! # Modules
//!
//! - [`style`]: Abstract styling roles with ANSI and plain implementations
//! - [`print`]: Numbered, column-aligned upgrade listing

pub mod print;
pub mod style;

pub use print::{print_diff, print_upgrades};
pub use style::{AnsiStyler, PlainStyler, Style, Styler, styler_for};
