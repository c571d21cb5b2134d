//! Team suggestion report rendering
//!
//! Renders the balance search's results as a numbered list of options,
//! each a two-column listing of the suggested teams with their rank sums
//! in the column headers.

use crate::balance::{TeamCombination, rank_sum};
use crate::constants::suggestions::COLUMN_WIDTH;
use crate::tags::{Player, tagged_line};

/// Renders the multi-option team suggestion report
///
/// The report opens with a `Team Suggestions:` header. Each combination
/// becomes a 1-indexed `Option <n>:` block: a column-header line with
/// both sides' rank sums, a blank line, one row per player pair, and a
/// trailing blank line. Row `i` pairs the `i`-th player of each side;
/// a missing entry renders as an empty cell.
pub fn suggestion_lines(combinations: &[TeamCombination]) -> Vec<String> {
    let mut lines = vec!["Team Suggestions:".to_owned()];

    for (index, combination) in combinations.iter().enumerate() {
        lines.push(format!("Option {}:", index + 1));
        lines.push(two_column(
            &format!("[{}] Team A", rank_sum(&combination.team_a)),
            &format!("[{}] Team B", rank_sum(&combination.team_b)),
        ));
        lines.push(String::new());
        lines.extend(team_rows(&combination.team_a, &combination.team_b));
        lines.push(String::new());
    }

    lines
}

fn team_rows(team_a: &[Player], team_b: &[Player]) -> Vec<String> {
    let rows = team_a.len().max(team_b.len());
    (0..rows)
        .map(|row| two_column(&cell(team_a.get(row)), &cell(team_b.get(row))))
        .collect()
}

fn cell(player: Option<&Player>) -> String {
    player.map(tagged_line).unwrap_or_default()
}

fn two_column(left: &str, right: &str) -> String {
    format!("{left:<width$}{right}", width = COLUMN_WIDTH)
}
