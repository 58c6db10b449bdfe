//! Proficiency Level
//!
//! Ordered three-step enumeration with explicit successor/predecessor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How good someone is at a skill, lowest first.
///
/// Deserialized through `FromStr`, so wire names are matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Level {
    #[default]
    Bad,
    HalfBad,
    Fantastic,
}

/// Returned when a string is not one of the three level names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level '{0}', expected one of: bad, halfbad, fantastic")]
pub struct LevelParseError(pub String);

impl Level {
    /// All levels in ascending order
    pub const ALL: [Level; 3] = [Level::Bad, Level::HalfBad, Level::Fantastic];

    /// Position in the ordering; also the persisted integer value
    pub fn index(self) -> u8 {
        match self {
            Level::Bad => 0,
            Level::HalfBad => 1,
            Level::Fantastic => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Next level up, `None` at the top
    pub fn succ(self) -> Option<Self> {
        match self {
            Level::Bad => Some(Level::HalfBad),
            Level::HalfBad => Some(Level::Fantastic),
            Level::Fantastic => None,
        }
    }

    /// Next level down, `None` at the bottom
    pub fn pred(self) -> Option<Self> {
        match self {
            Level::Bad => None,
            Level::HalfBad => Some(Level::Bad),
            Level::Fantastic => Some(Level::HalfBad),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Bad => "bad",
            Level::HalfBad => "halfbad",
            Level::Fantastic => "fantastic",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bad" => Ok(Level::Bad),
            "halfbad" => Ok(Level::HalfBad),
            "fantastic" => Ok(Level::Fantastic),
            other => Err(LevelParseError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = LevelParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bad() {
        assert_eq!(Level::default(), Level::Bad);
    }

    #[test]
    fn test_ordering_matches_index() {
        assert!(Level::Bad < Level::HalfBad);
        assert!(Level::HalfBad < Level::Fantastic);
        for level in Level::ALL {
            assert_eq!(Level::from_index(level.index()), Some(level));
        }
        assert_eq!(Level::from_index(3), None);
    }

    #[test]
    fn test_succ_and_pred_stop_at_the_ends() {
        assert_eq!(Level::Bad.pred(), None);
        assert_eq!(Level::Fantastic.succ(), None);
        assert_eq!(Level::HalfBad.succ(), Some(Level::Fantastic));
        assert_eq!(Level::HalfBad.pred(), Some(Level::Bad));
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Level::HalfBad).unwrap(), "\"halfbad\"");
        let parsed: Level = serde_json::from_str("\"fantastic\"").unwrap();
        assert_eq!(parsed, Level::Fantastic);
        let err = serde_json::from_str::<Level>("\"great\"").unwrap_err();
        assert!(err.to_string().contains("unknown level 'great'"));
        assert!(serde_json::from_str::<Level>("1").is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("bad".parse::<Level>(), Ok(Level::Bad));
        assert_eq!(
            "HalfBad".parse::<Level>(),
            Err(LevelParseError("HalfBad".to_string()))
        );
    }
}
