//! Play Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::plays::{Play, PlayId};

/// Wrapper for plays in YAML
#[derive(Debug, Deserialize)]
pub struct PlaysFixture {
    /// Map of play identifier -> play fixture
    pub plays: FxHashMap<PlayId, PlayFixture>,
}

/// Play Fixture
#[derive(Debug, Deserialize)]
pub struct PlayFixture {
    /// Play name
    pub name: String,

    /// Genre tag, e.g. `tragedy`
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<PlayFixture> for Play {
    fn from(fixture: PlayFixture) -> Self {
        Play::new(fixture.name, fixture.kind)
    }
}
