//! Engine configuration
//!
//! This module defines the two immutable configuration inputs the engine
//! is constructed with: the mapping from rank tiers to display titles,
//! and the toxicity symbol alphabet with its default pair. Both are
//! supplied once by the host and never change for the engine's lifetime.

use std::collections::BTreeMap;

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tags::Toxicity;

/// Errors that can occur while validating engine configuration
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration failed structural validation
    #[error("invalid configuration: {0}")]
    Invalid(#[from] garde::Report),
    /// The default toxicity pair uses a symbol outside the alphabet
    #[error("default toxicity symbol {0:?} is not in the alphabet")]
    UnknownDefaultSymbol(String),
}

/// Immutable mapping from integer rank tier to its display title
///
/// The map defines both the set of valid tiers and the display order:
/// reports walk the tiers in descending numeric order, so the highest
/// tier prints first regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTitles(BTreeMap<u32, String>);

impl RankTitles {
    /// Wraps a tier-to-title mapping
    pub fn new(titles: BTreeMap<u32, String>) -> Self {
        Self(titles)
    }

    /// Returns the display title for a tier, if the tier is known
    pub fn title(&self, tier: u32) -> Option<&str> {
        self.0.get(&tier).map(String::as_str)
    }

    /// Returns whether the tier is part of the configured tier set
    pub fn contains(&self, tier: u32) -> bool {
        self.0.contains_key(&tier)
    }

    /// Iterates the configured tiers in descending numeric order
    pub fn tiers_descending(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().rev().copied()
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for RankTitles {
    /// Collects `(tier, title)` pairs into a `RankTitles` mapping
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(tier, title)| (tier, title.into()))
                .collect(),
        )
    }
}

/// Toxicity symbol alphabet and the fallback pair
///
/// `levels` is the ordered alphabet of symbols a nickname may carry as
/// its trailing toxicity tag. `default` is the pair assigned when no
/// readable tag is present; both of its symbols must be drawn from the
/// alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ToxicityConfig {
    /// Ordered alphabet of toxicity symbols, friendliest first
    #[garde(length(min = 1))]
    pub levels: Vec<String>,
    /// Pair assigned when a nickname carries no readable toxicity tag
    #[garde(skip)]
    pub default: Toxicity,
}

impl ToxicityConfig {
    /// Validates the alphabet and the default pair's membership in it
    ///
    /// # Errors
    ///
    /// Returns [`Error::Invalid`] when the alphabet is empty and
    /// [`Error::UnknownDefaultSymbol`] when either default symbol is not
    /// part of the alphabet.
    pub fn check(&self) -> Result<(), Error> {
        self.validate()?;
        for symbol in [&self.default.is, &self.default.plays_with] {
            if !self.levels.contains(symbol) {
                return Err(Error::UnknownDefaultSymbol(symbol.clone()));
            }
        }
        Ok(())
    }
}
