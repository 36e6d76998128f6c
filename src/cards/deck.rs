use super::card::Card;
use super::id::CardId;
use crate::Arbitrary;

/// The player's master deck. Order is irrelevant to the encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// the ten-card Ironclad starter
    pub fn ironclad() -> Self {
        std::iter::empty()
            .chain(std::iter::repeat_n(CardId::StrikeRed, 5))
            .chain(std::iter::repeat_n(CardId::DefendRed, 4))
            .chain(std::iter::once(CardId::Bash))
            .map(Card::from)
            .collect()
    }
    pub fn obtain(&mut self, card: Card) {
        self.0.push(card);
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Arbitrary for Deck {
    fn random() -> Self {
        use rand::Rng;
        let n = rand::rng().random_range(10..40);
        (0..n).map(|_| Card::random()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_deck() {
        let deck = Deck::ironclad();
        assert_eq!(deck.len(), 10);
        assert_eq!(deck.iter().filter(|c| c.id() == CardId::StrikeRed).count(), 5);
    }
}
