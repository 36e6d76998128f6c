use crate::RELIC_COUNT;
use serde::Deserialize;
use serde::Serialize;

/// Engine relic id. Ids are dense in [0, RELIC_COUNT), so the relic block
/// indexes by id directly without a slot table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Relic(u8);

impl Relic {
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// u8 isomorphism, bounded
impl TryFrom<u8> for Relic {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match (n as usize) < RELIC_COUNT {
            true => Ok(Self(n)),
            false => Err(anyhow::anyhow!("relic id {} outside [0, {})", n, RELIC_COUNT)),
        }
    }
}
impl From<Relic> for u8 {
    fn from(r: Relic) -> u8 {
        r.0
    }
}

impl std::fmt::Display for Relic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "relic#{}", self.0)
    }
}

impl crate::Arbitrary for Relic {
    fn random() -> Self {
        use rand::Rng;
        Self(rand::rng().random_range(0..RELIC_COUNT as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded() {
        assert_eq!(Relic::try_from(177u8).unwrap().index(), 177);
        assert!(Relic::try_from(178u8).is_err());
    }

    #[test]
    fn deserialization_is_bounded() {
        assert!(serde_json::from_str::<Relic>("12").is_ok());
        assert!(serde_json::from_str::<Relic>("200").is_err());
    }
}
