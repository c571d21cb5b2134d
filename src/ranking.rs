//! Ranking report
//!
//! This module renders the community ranking: every member's nickname is
//! parsed for a rank tag, and the survivors are grouped under their tier
//! title from highest tier to lowest. Members whose nickname carries no
//! readable rank, or a rank with no configured title, are silently left
//! out; the report never errors.

use itertools::Itertools;

use crate::config::RankTitles;
use crate::display_order;
use crate::tags::{Player, TagParser};

/// Builds the ranking report lines for a roster of raw nicknames
///
/// Tiers print in descending numeric order. Each non-empty tier emits a
/// blank line, a `--[ **<Title>** ]--` header, and one line per nickname
/// sorted ascending; an empty tier emits nothing at all.
pub fn ranking_lines<S: AsRef<str>>(
    parser: &TagParser,
    titles: &RankTitles,
    nicknames: &[S],
) -> Vec<String> {
    let ranked = nicknames
        .iter()
        .map(|nickname| parser.parse(nickname.as_ref()))
        .filter(|player| player.rank.is_some_and(|tier| titles.contains(tier)))
        .collect_vec();

    titles
        .tiers_descending()
        .flat_map(|tier| tier_lines(&ranked, tier, titles))
        .collect()
}

fn tier_lines(ranked: &[Player], tier: u32, titles: &RankTitles) -> Vec<String> {
    let members = ranked
        .iter()
        .filter(|player| player.rank == Some(tier))
        .map(|player| player.nickname.clone())
        .sorted_by(|a, b| display_order(a, b))
        .collect_vec();

    if members.is_empty() {
        return Vec::new();
    }

    let title = titles.title(tier).expect("tier comes from the titles map");

    let mut lines = vec![String::new(), format!("--[ **{title}** ]--")];
    lines.extend(members);
    lines
}
