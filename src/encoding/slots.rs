use crate::CARD_SLOTS;
use crate::cards::CARD_ID_COUNT;
use crate::cards::COLORLESS_POOL;
use crate::cards::Card;
use crate::cards::CardId;
use crate::cards::Color;

/// Card id to card-block slot.
///
/// Red cards in id order come first, then the colorless pool sorted by
/// display name. Every other id has no slot: only cards an Ironclad deck can
/// hold are distinguished, and anything else reaching the encoder is a bug
/// upstream.
///
/// The colorless half is ordered by display name byte order, so renaming a
/// card shifts every slot after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlots([Option<usize>; CARD_ID_COUNT]);

impl Default for CardSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSlots {
    pub fn new() -> Self {
        let mut pool = COLORLESS_POOL.to_vec();
        pool.sort_by(|a, b| a.name().cmp(b.name()));
        let mut slots = [None; CARD_ID_COUNT];
        CardId::all()
            .iter()
            .copied()
            .filter(|id| id.color() == Color::Red)
            .chain(pool)
            .enumerate()
            .for_each(|(slot, id)| slots[id as usize] = Some(slot));
        let table = Self(slots);
        debug_assert_eq!(table.len(), CARD_SLOTS);
        log::debug!("built card slot table ({} slots)", table.len());
        table
    }

    pub fn slot(&self, id: CardId) -> Option<usize> {
        self.0[id as usize]
    }

    /// number of ids that have a slot
    pub fn len(&self) -> usize {
        self.0.iter().filter(|s| s.is_some()).count()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// position within the card block: two entries per slot, the second
    /// for the upgraded copy
    pub fn index(&self, card: &Card) -> anyhow::Result<usize> {
        self.slot(card.id())
            .map(|slot| slot * 2 + card.is_upgraded() as usize)
            .ok_or_else(|| anyhow::anyhow!("{} card {} has no encoding slot", card.color(), card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_contiguous_and_unique() {
        let slots = CardSlots::new();
        let mut taken = CardId::all()
            .iter()
            .filter_map(|id| slots.slot(*id))
            .collect::<Vec<_>>();
        taken.sort();
        assert_eq!(taken, (0..CARD_SLOTS).collect::<Vec<_>>());
    }

    #[test]
    fn red_then_sorted_colorless() {
        let slots = CardSlots::new();
        assert_eq!(slots.slot(CardId::Anger), Some(0));
        assert_eq!(slots.slot(CardId::Armaments), Some(1));
        assert_eq!(slots.slot(CardId::Whirlwind), Some(73));
        assert_eq!(slots.slot(CardId::WildStrike), Some(74));
        assert_eq!(slots.slot(CardId::Apotheosis), Some(75));
        assert_eq!(slots.slot(CardId::BandageUp), Some(76));
        assert_eq!(slots.slot(CardId::Violence), Some(109));
    }

    #[test]
    fn red_ids_keep_id_order() {
        let slots = CardSlots::new();
        let reds = CardId::all()
            .iter()
            .filter(|id| id.color() == Color::Red)
            .map(|id| slots.slot(*id).unwrap())
            .collect::<Vec<_>>();
        assert!(reds.windows(2).all(|w| w[0] + 1 == w[1]));
    }

    #[test]
    fn deterministic() {
        assert_eq!(CardSlots::new(), CardSlots::new());
    }

    #[test]
    fn other_colors_have_no_slot() {
        let slots = CardSlots::new();
        assert_eq!(slots.slot(CardId::Invalid), None);
        assert_eq!(slots.slot(CardId::Neutralize), None);
        assert_eq!(slots.slot(CardId::Shiv), None);
        assert_eq!(slots.slot(CardId::Wound), None);
        assert_eq!(slots.slot(CardId::AscendersBane), None);
        assert!(slots.index(&Card::from(CardId::Zap)).is_err());
    }

    #[test]
    fn upgraded_copies_take_odd_index() {
        let slots = CardSlots::new();
        let bash = Card::from(CardId::Bash);
        let i = slots.index(&bash).unwrap();
        assert_eq!(i % 2, 0);
        assert_eq!(slots.index(&bash.upgrade()).unwrap(), i + 1);
    }
}
