//! Plays

use std::{fmt, str::FromStr};

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{calculators::CalculatorError, invoices::Performance, statement::StatementError};

/// Opaque identifier of a play in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    /// Create a new play identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for PlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Genres with a known pricing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    /// Tragedy
    Tragedy,

    /// Comedy
    Comedy,
}

impl FromStr for Genre {
    type Err = CalculatorError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(CalculatorError::UnknownGenre(other.to_string())),
        }
    }
}

/// Play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    /// Play name
    pub name: String,

    /// Genre tag as supplied, e.g. `"tragedy"`.
    ///
    /// Kept unparsed; an unrecognised tag only fails once a calculator is selected for it.
    pub kind: String,
}

impl Play {
    /// Create a new play.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Parse the genre tag.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::UnknownGenre`] if the tag is not a recognised genre.
    pub fn genre(&self) -> Result<Genre, CalculatorError> {
        self.kind.parse()
    }
}

/// Lookup table of plays keyed by [`PlayId`].
#[derive(Debug, Clone, Default)]
pub struct PlayCatalog {
    plays: FxHashMap<PlayId, Play>,
}

impl PlayCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a play, replacing any previous play with the same identifier.
    pub fn insert(&mut self, id: impl Into<PlayId>, play: Play) -> Option<Play> {
        self.plays.insert(id.into(), play)
    }

    /// Look up a play by identifier.
    pub fn get(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Resolve the play a performance refers to.
    ///
    /// # Errors
    ///
    /// Returns [`StatementError::UnknownPlay`] if the identifier is not in the catalog.
    pub fn play_for(&self, performance: &Performance) -> Result<&Play, StatementError> {
        self.get(&performance.play_id).ok_or_else(|| {
            tracing::warn!(play_id = %performance.play_id, "play reference does not resolve");

            StatementError::UnknownPlay(performance.play_id.clone())
        })
    }

    /// Number of plays in the catalog.
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl FromIterator<(PlayId, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (PlayId, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn genre_parses_known_tags() -> TestResult {
        assert_eq!("tragedy".parse::<Genre>()?, Genre::Tragedy);
        assert_eq!("comedy".parse::<Genre>()?, Genre::Comedy);

        Ok(())
    }

    #[test]
    fn genre_rejects_unknown_tags() {
        assert!(matches!(
            "pastoral".parse::<Genre>(),
            Err(CalculatorError::UnknownGenre(kind)) if kind == "pastoral"
        ));
    }

    #[test]
    fn genre_tags_are_case_sensitive() {
        assert!("Tragedy".parse::<Genre>().is_err());
    }

    #[test]
    fn play_for_resolves_performance() -> TestResult {
        let catalog: PlayCatalog = [(PlayId::from("hamlet"), Play::new("Hamlet", "tragedy"))]
            .into_iter()
            .collect();

        let play = catalog.play_for(&Performance::new("hamlet", 55))?;

        assert_eq!(play.name, "Hamlet");
        assert_eq!(play.genre()?, Genre::Tragedy);

        Ok(())
    }

    #[test]
    fn play_for_errors_on_missing_play() {
        let catalog = PlayCatalog::new();

        assert!(matches!(
            catalog.play_for(&Performance::new("macbeth", 10)),
            Err(StatementError::UnknownPlay(id)) if id.as_str() == "macbeth"
        ));
    }

    #[test]
    fn insert_replaces_existing_play() {
        let mut catalog = PlayCatalog::new();

        assert!(catalog.insert("hamlet", Play::new("Hamlet", "tragedy")).is_none());

        let previous = catalog.insert("hamlet", Play::new("Hamlet (revival)", "tragedy"));

        assert_eq!(previous.map(|play| play.name), Some("Hamlet".to_string()));
        assert_eq!(catalog.len(), 1);
    }
}
