use serde::Deserialize;
use serde::Serialize;

/// Card color category. Only Red and the colorless pool are individually
/// distinguished by the observation encoding.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Purple,
    Colorless,
    Curse,
    Status,
    Invalid,
}

impl Color {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Red,
            Self::Green,
            Self::Blue,
            Self::Purple,
            Self::Colorless,
            Self::Curse,
            Self::Status,
            Self::Invalid,
        ]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
            Self::Purple => write!(f, "purple"),
            Self::Colorless => write!(f, "colorless"),
            Self::Curse => write!(f, "curse"),
            Self::Status => write!(f, "status"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}
