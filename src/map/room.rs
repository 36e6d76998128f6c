use serde::Deserialize;
use serde::Serialize;

/// Room kind of a map node. The first `ROOM_KINDS` variants are the ones
/// the topology one-hot distinguishes.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Room {
    Shop = 0,
    Rest = 1,
    Event = 2,
    Elite = 3,
    Monster = 4,
    Treasure = 5,
    Boss = 6,
    BossTreasure = 7,
    #[default]
    None = 8,
    Invalid = 9,
}

impl Room {
    /// the kinds a regular map row can hold
    pub const fn all() -> &'static [Self] {
        &[
            Self::Shop,
            Self::Rest,
            Self::Event,
            Self::Elite,
            Self::Monster,
            Self::Treasure,
        ]
    }
}

/// u8 isomorphism
impl From<Room> for u8 {
    fn from(r: Room) -> u8 {
        r as u8
    }
}
impl From<u8> for Room {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Shop,
            1 => Self::Rest,
            2 => Self::Event,
            3 => Self::Elite,
            4 => Self::Monster,
            5 => Self::Treasure,
            6 => Self::Boss,
            7 => Self::BossTreasure,
            8 => Self::None,
            _ => Self::Invalid,
        }
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Shop => "$",
                Self::Rest => "R",
                Self::Event => "?",
                Self::Elite => "E",
                Self::Monster => "M",
                Self::Treasure => "T",
                Self::Boss => "B",
                Self::BossTreasure => "b",
                Self::None => " ",
                Self::Invalid => "x",
            }
        )
    }
}

impl crate::Arbitrary for Room {
    /// weighted roughly like act one: mostly monsters and events
    fn random() -> Self {
        use rand::Rng;
        match rand::rng().random_range(0..20) {
            0..=1 => Self::Shop,
            2..=4 => Self::Rest,
            5..=9 => Self::Event,
            10..=11 => Self::Elite,
            _ => Self::Monster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        assert!((0u8..10).all(|n| u8::from(Room::from(n)) == n));
    }

    #[test]
    fn one_hot_kinds() {
        assert_eq!(Room::all().len(), crate::ROOM_KINDS);
        assert!(Room::all().iter().all(|r| (*r as usize) < crate::ROOM_KINDS));
    }
}
