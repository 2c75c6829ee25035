//! Marking the active project in the list handed to the selector.

use crossterm::style::Color::Yellow;
use crossterm::style::{style, Attribute, Stylize};
use itertools::Itertools;

/// Styles a list entry as the active project (bold yellow).
pub fn emphasize_active(entry: &str) -> String {
    style(entry).with(Yellow).attribute(Attribute::Bold).to_string()
}

/// Renders the raw `projects list` output for the selector.
///
/// Entries are compared to `current` after trimming, but emitted untouched, in
/// their original order. Blank entries from the split are kept.
pub fn render_project_list(projects: &str, current: &str) -> String {
    let current = current.trim();

    projects
        .split('\n')
        .map(|entry| {
            if entry.trim() == current {
                emphasize_active(entry)
            } else {
                entry.to_string()
            }
        })
        .join("\n")
}
