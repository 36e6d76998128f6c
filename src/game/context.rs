use super::encounter::Encounter;
use super::event::Event;
use super::neow::Choice;
use super::relic::Relic;
use crate::Arbitrary;
use crate::cards::Deck;

/// Read-only view of the engine state the observation is built from.
///
/// The engine owns the real game; this is the subset of it the encoder reads.
/// Nothing here is validated for rule legality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameContext {
    pub cur_hp: i32,
    pub max_hp: i32,
    pub gold: i32,
    pub floor: i32,
    pub boss: Encounter,
    pub deck: Deck,
    pub relics: Vec<Relic>,
    pub event: Event,
    /// pending Neow options, at most four, in offer order
    pub neow: Vec<Choice>,
}

impl GameContext {
    pub fn has_relic(&self, relic: Relic) -> bool {
        self.relics.contains(&relic)
    }
}

/// Ironclad at the Neow screen, before any choice is taken.
impl Default for GameContext {
    fn default() -> Self {
        Self {
            cur_hp: 80,
            max_hp: 80,
            gold: 99,
            floor: 0,
            boss: Encounter::SlimeBoss,
            deck: Deck::ironclad(),
            relics: Vec::new(),
            event: Event::Neow,
            neow: Vec::new(),
        }
    }
}

impl Arbitrary for GameContext {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let max_hp = rng.random_range(1..300);
        let relics = (0..rng.random_range(0..12))
            .map(|_| Relic::random())
            .collect();
        let neow = (0..rng.random_range(0..=crate::CHOICE_COUNT))
            .map(|_| Choice::random())
            .collect();
        Self {
            cur_hp: rng.random_range(0..=max_hp),
            max_hp,
            gold: rng.random_range(0..3000),
            floor: rng.random_range(0..=crate::FLOOR_CAP),
            boss: Encounter::random(),
            deck: Deck::random(),
            relics,
            event: Event::random(),
            neow,
        }
    }
}
