//! Matchmaker facade
//!
//! This module ties the engine together the way a bot host drives it:
//! one [`Matchmaker`] is built at startup from the community's rank
//! titles and toxicity configuration, and every chat event then calls
//! into it. All operations are pure and take `&self`, so a single
//! instance serves concurrent events without locking.

use serde::Serialize;
use thiserror::Error;

use crate::balance;
use crate::config::{self, RankTitles, ToxicityConfig};
use crate::constants::roster::MAX_SEARCH_SIZE;
use crate::ranking;
use crate::suggestions;
use crate::tags::{self, Player, TagParser};

/// Errors from the roster screen ahead of the team balance search
///
/// The search assumes a validated roster; these are the violations the
/// facade screens for. Turning them into a user-facing "cannot suggest
/// teams" message is the dispatch collaborator's job.
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The roster cannot be split into two equal teams
    #[error("roster of {0} players cannot form two equal teams")]
    OddRoster(usize),
    /// A player carries no rank tag, so balance cannot be judged
    #[error("player {0:?} has no rank tag")]
    Unranked(String),
    /// The roster exceeds the brute-force search ceiling
    #[error("roster of {0} players is too large to search")]
    TooLarge(usize),
}

/// The engine facade: validated configuration plus the compiled parser
#[derive(Debug)]
pub struct Matchmaker {
    titles: RankTitles,
    toxicity: ToxicityConfig,
    parser: TagParser,
}

impl Matchmaker {
    /// Builds a matchmaker from the community configuration
    ///
    /// # Errors
    ///
    /// Returns a [`config::Error`] when the toxicity configuration is
    /// invalid (empty alphabet, or a default symbol outside it).
    pub fn new(titles: RankTitles, toxicity: ToxicityConfig) -> Result<Self, config::Error> {
        let parser = TagParser::new(&toxicity)?;
        Ok(Self {
            titles,
            toxicity,
            parser,
        })
    }

    /// Parses a raw display name into a player record
    pub fn parse(&self, nickname: &str) -> Player {
        self.parser.parse(nickname)
    }

    /// Decorates a bare nickname with the default rank marker and pair
    pub fn default_decorated(&self, nickname: &str) -> String {
        tags::default_decorated(nickname, &self.toxicity)
    }

    /// Builds the ranking report lines for a roster of raw nicknames
    pub fn build_ranking<S: AsRef<str>>(&self, nicknames: &[S]) -> Vec<String> {
        ranking::ranking_lines(&self.parser, &self.titles, nicknames)
    }

    /// Builds the team suggestion report for the supplied roster
    ///
    /// The supplier is called once; the roster it returns is screened
    /// for the search's preconditions, then every minimal-difference,
    /// party-cohesive split is found and rendered.
    ///
    /// # Errors
    ///
    /// Returns a [`RosterError`] when the roster is odd-sized, contains
    /// an unranked player, or exceeds the search ceiling.
    pub fn team_suggestions<F>(&self, roster: F) -> Result<Vec<String>, RosterError>
    where
        F: Fn() -> Vec<Player>,
    {
        let players = roster();
        screen(&players)?;

        let combinations = balance::best_combinations(&players);
        log::debug!(
            "{} balanced splits for {} players",
            combinations.len(),
            players.len()
        );

        Ok(suggestions::suggestion_lines(&combinations))
    }
}

/// Checks the preconditions the balance search assumes
fn screen(players: &[Player]) -> Result<(), RosterError> {
    if players.len() > MAX_SEARCH_SIZE {
        return Err(RosterError::TooLarge(players.len()));
    }
    if players.len() % 2 != 0 {
        return Err(RosterError::OddRoster(players.len()));
    }
    if let Some(unranked) = players.iter().find(|player| player.rank.is_none()) {
        return Err(RosterError::Unranked(unranked.nickname.clone()));
    }
    Ok(())
}
