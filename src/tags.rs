//! Nickname tag parsing
//!
//! This module turns raw display names into structured [`Player`]
//! records. The community encodes three things directly in nicknames: a
//! leading rank tag (`[7]`, or `[7?]` while unconfirmed), an optional
//! party tag (`[P2]`) binding players who queue together, and a trailing
//! two-symbol toxicity pair drawn from a configured alphabet. Parsing
//! never fails; anything unreadable degrades to an absent value or the
//! configured default pair.

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{self, ToxicityConfig};

/// A two-symbol behavioral tag carried at the tail of a nickname
///
/// The first symbol describes how the player behaves, the second what
/// behavior they tolerate in teammates. Both are always populated: when
/// a nickname carries no readable tag, the configured default pair is
/// used instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toxicity {
    /// How the player behaves
    pub is: String,
    /// What behavior the player tolerates in teammates
    pub plays_with: String,
}

impl Toxicity {
    /// Builds a pair from its two symbols
    pub fn new(is: impl Into<String>, plays_with: impl Into<String>) -> Self {
        Self {
            is: is.into(),
            plays_with: plays_with.into(),
        }
    }
}

/// A player parsed out of a raw display name
///
/// The nickname is kept exactly as supplied and is never rewritten;
/// reports quote it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The original raw nickname
    pub nickname: String,
    /// Rank tier from the first `[N]` or `[N?]` tag, if readable
    pub rank: Option<u32>,
    /// Party grouping id from a `[PN]` tag, if present
    pub party: Option<u32>,
    /// Toxicity pair from the nickname tail, or the configured default
    pub toxicity: Toxicity,
}

/// Parses raw nicknames into [`Player`] records
///
/// The parser is compiled once from the engine configuration and is
/// immutable afterwards; parsing is deterministic and side-effect free,
/// so a single parser can serve concurrent events.
#[derive(Debug)]
pub struct TagParser {
    rank: Regex,
    party: Regex,
    toxicity: Regex,
    fallback: Toxicity,
}

impl TagParser {
    /// Compiles a parser for the given toxicity configuration
    ///
    /// # Errors
    ///
    /// Returns a [`config::Error`] when the configuration is invalid
    /// (empty alphabet, or a default symbol outside the alphabet).
    pub fn new(config: &ToxicityConfig) -> Result<Self, config::Error> {
        config.check()?;

        let symbols = config.levels.iter().map(|s| regex::escape(s)).join("|");

        Ok(Self {
            rank: Regex::new(r"\[(\d+)\??\]").expect("rank pattern is valid"),
            party: Regex::new(r"\[P(\d+)\]").expect("party pattern is valid"),
            toxicity: Regex::new(&format!(r"({symbols})({symbols})\s*$"))
                .expect("escaped alternation is a valid pattern"),
            fallback: config.default.clone(),
        })
    }

    /// Parses one display name
    ///
    /// Rank and party come from the first matching bracket tag anywhere
    /// in the nickname; the toxicity pair must sit at the very end as
    /// two consecutive alphabet symbols, with trailing whitespace
    /// tolerated. Unreadable values degrade rather than erroring: a rank
    /// too large for the tier type parses as absent, exactly like no tag
    /// at all.
    pub fn parse(&self, nickname: &str) -> Player {
        let rank: Option<u32> = self
            .rank
            .captures(nickname)
            .and_then(|caps| caps[1].parse().ok());

        let party: Option<u32> = self
            .party
            .captures(nickname)
            .and_then(|caps| caps[1].parse().ok());

        let toxicity = self.toxicity.captures(nickname).map_or_else(
            || self.fallback.clone(),
            |caps| Toxicity::new(&caps[1], &caps[2]),
        );

        Player {
            nickname: nickname.to_owned(),
            rank,
            party,
            toxicity,
        }
    }
}

/// Renders a player the way reports list them
///
/// The shape is `[<rank>] <nickname>`, with a ` [P<party>]` suffix when
/// the player belongs to a party. A missing rank renders as 0, matching
/// how the balance search weighs it.
pub fn tagged_line(player: &Player) -> String {
    let rank = player.rank.unwrap_or(0);
    match player.party {
        Some(party) => format!("[{rank}] {} [P{party}]", player.nickname),
        None => format!("[{rank}] {}", player.nickname),
    }
}

/// Decorates a bare nickname with the default tags for a new member
///
/// New members start with an unknown-rank marker and the configured
/// default toxicity pair: `[?] <nickname> <is><plays_with>`. Applying
/// the decorated name on the platform is the host's job.
pub fn default_decorated(nickname: &str, config: &ToxicityConfig) -> String {
    format!(
        "[?] {nickname} {}{}",
        config.default.is, config.default.plays_with
    )
}
