//! Lineup detection and formatting
//!
//! A lineup is a named roster of players (a standing five, an agenda of
//! who is online) identified by a configured name prefix. This module
//! recognizes lineup names and renders a lineup map as report lines; the
//! host decides where the names and members come from and where the
//! lines go.

use std::collections::HashMap;

use itertools::Itertools;

use crate::display_order;

/// Mapping from lineup name to the nicknames of its members
pub type LineupMap = HashMap<String, Vec<String>>;

/// Header line used when the caller does not supply one
pub const DEFAULT_HEADER: &str = "Lineups:";

/// Message used for an empty lineup map when the caller does not supply one
pub const DEFAULT_EMPTY_MESSAGE: &str = "No lineups found.";

/// Recognizes lineup names by their configured prefix
#[derive(Debug, Clone)]
pub struct LineupDetector {
    prefix: String,
}

impl LineupDetector {
    /// Creates a detector for names carrying the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns whether a name denotes a lineup
    ///
    /// A lineup name starts with the prefix, compared case-insensitively,
    /// and has something after it; the bare prefix alone is not a lineup.
    pub fn is_lineup(&self, name: &str) -> bool {
        let name_folded = name.to_lowercase();
        let prefix_folded = self.prefix.to_lowercase();

        let result = name_folded != prefix_folded && name_folded.starts_with(&prefix_folded);

        if result {
            log::debug!("{name:?} starts with {:?}, so it is a lineup", self.prefix);
        } else {
            log::debug!(
                "{name:?} does not start with {:?}, so it is not a lineup",
                self.prefix
            );
        }

        result
    }
}

/// Formats a lineup map into report lines
///
/// An empty map yields just `empty_message`. Otherwise the report is the
/// header, a blank line, then one block per lineup sorted by name: the
/// lineup name with a colon, one `  - <player>` line per member sorted
/// ascending (or `  (no players)` when the lineup is empty), and a blank
/// line closing each block.
pub fn lineup_lines(lineups: &LineupMap, header: &str, empty_message: &str) -> Vec<String> {
    if lineups.is_empty() {
        return vec![empty_message.to_owned()];
    }

    let mut lines = vec![header.to_owned(), String::new()];

    for name in lineups
        .keys()
        .sorted_by(|a, b| display_order(a.as_str(), b.as_str()))
    {
        lines.push(format!("{name}:"));

        let members = lineups[name]
            .iter()
            .sorted_by(|a, b| display_order(a.as_str(), b.as_str()))
            .collect_vec();

        if members.is_empty() {
            lines.push("  (no players)".to_owned());
        } else {
            lines.extend(members.iter().map(|member| format!("  - {member}")));
        }

        lines.push(String::new());
    }

    lines
}
