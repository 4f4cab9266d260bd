//! The potato catalog.
//!
//! Four fixed variants, ordered from least to most volatile. The set is
//! closed, so it's a plain enum with a lookup table rather than a trait.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// A potato variant.
///
/// `kind()` is the stable identifier that gets persisted; `Display` is the
/// decorated name shown to players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Potato {
    Raw,
    Baked,
    Hot,
    Burnt,
}

impl Potato {
    /// Every variant, least volatile first.
    pub const ALL: [Potato; 4] =
        [Potato::Raw, Potato::Baked, Potato::Hot, Potato::Burnt];

    /// The persisted identifier for this variant.
    pub fn kind(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Baked => "baked",
            Self::Hot => "hot",
            Self::Burnt => "burnt",
        }
    }

    /// Base explosion chance, in percent.
    pub fn percent_chance(self) -> u32 {
        match self {
            Self::Raw => 1,
            Self::Baked => 2,
            Self::Hot => 5,
            Self::Burnt => 10,
        }
    }

    /// Looks a variant up by its persisted kind.
    pub fn from_kind(kind: &str) -> Result<Self, ProtocolError> {
        Self::ALL
            .into_iter()
            .find(|p| p.kind() == kind)
            .ok_or_else(|| ProtocolError::InvalidPotatoKind(kind.to_string()))
    }
}

impl fmt::Display for Potato {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => write!(f, "raw potato"),
            Self::Baked => write!(f, "baked 🔥 potato 🥔"),
            Self::Hot => write!(f, "hot 🔥🔥 potato 🥔"),
            Self::Burnt => write!(f, "burnt 🔥🔥🔥 potato 🥔"),
        }
    }
}

impl FromStr for Potato {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_kind(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_ordered_by_volatility() {
        let chances: Vec<u32> =
            Potato::ALL.iter().map(|p| p.percent_chance()).collect();
        assert_eq!(chances, vec![1, 2, 5, 10]);
        assert!(Potato::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_from_kind_finds_every_variant() {
        for potato in Potato::ALL {
            assert_eq!(Potato::from_kind(potato.kind()), Ok(potato));
        }
    }

    #[test]
    fn test_from_kind_rejects_unknown() {
        assert_eq!(
            "mashed".parse::<Potato>(),
            Err(ProtocolError::InvalidPotatoKind("mashed".into()))
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Potato::Raw.to_string(), "raw potato");
        assert_eq!(Potato::Burnt.to_string(), "burnt 🔥🔥🔥 potato 🥔");
    }

    #[test]
    fn test_serializes_as_kind() {
        let json = serde_json::to_string(&Potato::Hot).unwrap();
        assert_eq!(json, "\"hot\"");
    }
}
