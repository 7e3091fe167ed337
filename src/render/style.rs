//! Styling roles and their terminal rendering

use std::io::IsTerminal;

use owo_colors::AnsiColors;

use crate::config::ColorChoice;
use crate::diff::Change;

/// Semantic role of a piece of listing text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Removed part of the installed version
    Removed,
    /// Added part of the available version
    Added,
    /// Package names
    Bold,
    /// Listing numbers
    Index,
    /// Repository names, colored by a hash of the name
    Repository,
}

impl From<Change> for Style {
    fn from(change: Change) -> Self {
        match change {
            Change::Removed => Style::Removed,
            Change::Added => Style::Added,
        }
    }
}

/// Applies a [`Style`] to text
pub trait Styler {
    fn style(&self, text: &str, style: Style) -> String;
}

/// Styles text with ANSI escape codes
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

/// Leaves text unchanged, for non-interactive output
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

const REPOSITORY_COLORS: [AnsiColors; 6] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
];

/// Pick a stable color for a repository name (djb2 hash)
pub fn repository_color(name: &str) -> AnsiColors {
    let hash = name.bytes().fold(5381u64, |hash, byte| {
        u64::from(byte).wrapping_add((hash << 5).wrapping_add(hash))
    });
    REPOSITORY_COLORS[(hash % REPOSITORY_COLORS.len() as u64) as usize]
}

impl Styler for AnsiStyler {
    fn style(&self, text: &str, style: Style) -> String {
        // Scoped here: its `style` method would clash with `Styler::style`.
        use owo_colors::OwoColorize;

        match style {
            Style::Removed => text.red().to_string(),
            Style::Added => text.green().to_string(),
            Style::Bold => text.bold().to_string(),
            Style::Index => text.magenta().to_string(),
            Style::Repository => text.color(repository_color(text)).bold().to_string(),
        }
    }
}

impl Styler for PlainStyler {
    fn style(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}

/// Resolve a [`ColorChoice`] into a styler for stdout
pub fn styler_for(choice: ColorChoice) -> Box<dyn Styler> {
    let use_color = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    };

    if use_color {
        Box::new(AnsiStyler)
    } else {
        Box::new(PlainStyler)
    }
}
