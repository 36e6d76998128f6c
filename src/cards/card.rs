use super::color::Color;
use super::id::CardId;
use super::pool::COLORLESS_POOL;
use serde::Deserialize;
use serde::Serialize;

/// A card as the deck holds it: base identity plus upgrade state.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    upgraded: bool,
}

impl Card {
    pub const fn new(id: CardId, upgraded: bool) -> Self {
        Self { id, upgraded }
    }
    pub const fn id(&self) -> CardId {
        self.id
    }
    pub const fn color(&self) -> Color {
        self.id.color()
    }
    pub const fn is_upgraded(&self) -> bool {
        self.upgraded
    }
    pub const fn upgrade(self) -> Self {
        Self {
            id: self.id,
            upgraded: true,
        }
    }
}

impl From<CardId> for Card {
    fn from(id: CardId) -> Self {
        Self::new(id, false)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.upgraded {
            true => write!(f, "{}+", self.id),
            false => write!(f, "{}", self.id),
        }
    }
}

/// Draws from the cards an Ironclad deck can actually hold:
/// red cards and the colorless reward pool.
impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        use rand::seq::IndexedRandom;
        let ref mut rng = rand::rng();
        let id = match rng.random_bool(0.9) {
            true => CardId::all()
                .iter()
                .filter(|id| id.color() == Color::Red)
                .copied()
                .collect::<Vec<_>>()
                .choose(rng)
                .copied()
                .unwrap_or(CardId::StrikeRed),
            false => COLORLESS_POOL
                .choose(rng)
                .copied()
                .unwrap_or(CardId::Apotheosis),
        };
        Self::new(id, rng.random_bool(0.25))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn upgrade_keeps_identity() {
        let card = Card::from(CardId::Bash).upgrade();
        assert_eq!(card.id(), CardId::Bash);
        assert!(card.is_upgraded());
        assert_eq!(card.to_string(), "BASH+");
    }

    #[test]
    fn random_cards_are_red_or_pooled() {
        assert!((0..256)
            .map(|_| Card::random())
            .all(|c| c.color() == Color::Red || COLORLESS_POOL.contains(&c.id())));
    }
}
