use super::bosses::BossSlots;
use super::choice::ChoiceFeatures;
use super::layout::*;
use super::observation::Observation;
use super::slots::CardSlots;
use crate::CARD_COUNT_CAP;
use crate::CHOICE_COUNT;
use crate::CHOICE_WIDTH;
use crate::GOLD_CAP;
use crate::HP_CAP;
use crate::cards::Card;
use crate::game::GameContext;
use std::sync::OnceLock;

/// Builds observations and their ceilings.
///
/// Holds the card and boss slot tables, which are built once and never
/// change. Construct one at startup and pass it around, or use
/// [`Encoder::shared`] for a lazily built process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    cards: CardSlots,
    bosses: BossSlots,
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            cards: CardSlots::new(),
            bosses: BossSlots::new(),
        }
    }

    pub fn shared() -> &'static Self {
        static ENCODER: OnceLock<Encoder> = OnceLock::new();
        ENCODER.get_or_init(Self::new)
    }

    pub fn cards(&self) -> &CardSlots {
        &self.cards
    }
    pub fn bosses(&self) -> &BossSlots {
        &self.bosses
    }

    /// position of a card within the card block
    pub fn card_index(&self, card: &Card) -> anyhow::Result<usize> {
        self.cards
            .index(card)
            .inspect_err(|e| log::warn!("{}", e))
    }

    /// Encode a game state.
    ///
    /// HP, gold, and card counts saturate at their ceilings. A deck card
    /// without a slot, a boss outside the boss table, or more than
    /// `CHOICE_COUNT` pending choices means the engine handed us a state this
    /// layout cannot represent; that is returned as an error rather than
    /// written somewhere wrong.
    pub fn observe(&self, gc: &GameContext) -> anyhow::Result<Observation> {
        let mut obs = Observation::zeros();
        obs.set(&CUR_HP, 0, gc.cur_hp.min(HP_CAP))?;
        obs.set(&MAX_HP, 0, gc.max_hp.min(HP_CAP))?;
        obs.set(&GOLD, 0, gc.gold.min(GOLD_CAP))?;
        obs.set(&FLOOR, 0, gc.floor)?;
        let boss = self
            .bosses
            .slot(gc.boss)
            .inspect_err(|e| log::warn!("{}", e))?;
        obs.set(&BOSS, boss, 1)?;
        for card in gc.deck.iter() {
            obs.bump(&CARDS, self.card_index(card)?, CARD_COUNT_CAP)?;
        }
        for relic in gc.relics.iter() {
            obs.set(&RELICS, relic.index(), 1)?;
        }
        obs.set(&EVENT, u8::from(gc.event) as usize, 1)?;
        if gc.neow.len() > CHOICE_COUNT {
            log::warn!("{} pending choices, layout holds {}", gc.neow.len(), CHOICE_COUNT);
            anyhow::bail!("{} pending choices exceed {}", gc.neow.len(), CHOICE_COUNT);
        }
        for (k, choice) in gc.neow.iter().enumerate() {
            for (j, value) in ChoiceFeatures::from(*choice).iter().enumerate() {
                obs.set(&CHOICES, k * CHOICE_WIDTH + j, value)?;
            }
        }
        Ok(obs)
    }

    /// Per-slot ceilings, in the same layout [`Encoder::observe`] writes.
    /// Constant; callers may compute it once and keep it.
    pub fn maximum() -> Observation {
        let mut max = Observation::zeros();
        for field in LAYOUT.iter() {
            for i in 0..field.width() {
                max.set(field, i, field.ceiling(i))
                    .expect("slot within its own field");
            }
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FLOOR_CAP;
    use crate::Value;
    use crate::cards::CardId;
    use crate::encoding::choice::*;
    use crate::game::*;

    fn context() -> GameContext {
        GameContext::default()
    }

    #[test]
    fn scalars_clamp() {
        let gc = GameContext {
            cur_hp: 250,
            max_hp: 999,
            gold: 5000,
            floor: 17,
            ..context()
        };
        let obs = Encoder::new().observe(&gc).unwrap();
        assert_eq!(obs.field(&CUR_HP), &[HP_CAP]);
        assert_eq!(obs.field(&MAX_HP), &[HP_CAP]);
        assert_eq!(obs.field(&GOLD), &[GOLD_CAP]);
        assert_eq!(obs.field(&FLOOR), &[17]);
    }

    #[test]
    fn boss_one_hot() {
        let gc = GameContext {
            boss: Encounter::Hexaghost,
            ..context()
        };
        let obs = Encoder::new().observe(&gc).unwrap();
        assert_eq!(obs.field(&BOSS), &[0, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn starter_deck_counts() {
        let encoder = Encoder::new();
        let obs = encoder.observe(&context()).unwrap();
        let strike = encoder.card_index(&Card::from(CardId::StrikeRed)).unwrap();
        let defend = encoder.card_index(&Card::from(CardId::DefendRed)).unwrap();
        let bash = encoder.card_index(&Card::from(CardId::Bash)).unwrap();
        let cards = obs.field(&CARDS);
        assert_eq!(cards[strike], 5);
        assert_eq!(cards[defend], 4);
        assert_eq!(cards[bash], 1);
        assert_eq!(cards.iter().sum::<Value>(), 10);
    }

    #[test]
    fn upgraded_copies_counted_apart() {
        let encoder = Encoder::new();
        let mut gc = context();
        gc.deck.obtain(Card::from(CardId::Bash).upgrade());
        let obs = encoder.observe(&gc).unwrap();
        let bash = encoder.card_index(&Card::from(CardId::Bash)).unwrap();
        assert_eq!(obs.field(&CARDS)[bash], 1);
        assert_eq!(obs.field(&CARDS)[bash + 1], 1);
    }

    #[test]
    fn card_count_saturates() {
        let encoder = Encoder::new();
        let strike = encoder.card_index(&Card::from(CardId::StrikeRed)).unwrap();
        let mut gc = context();
        let mut counts = Vec::new();
        for _ in 0..5 {
            gc.deck.obtain(Card::from(CardId::StrikeRed));
            counts.push(encoder.observe(&gc).unwrap().field(&CARDS)[strike]);
        }
        assert_eq!(counts, vec![6, 7, 7, 7, 7]);
    }

    #[test]
    fn relics_and_event() {
        let gc = GameContext {
            relics: vec![Relic::try_from(0u8).unwrap(), Relic::try_from(177u8).unwrap()],
            event: Event::Vampires,
            ..context()
        };
        let obs = Encoder::new().observe(&gc).unwrap();
        assert_eq!(obs.field(&RELICS)[0], 1);
        assert_eq!(obs.field(&RELICS)[177], 1);
        assert_eq!(obs.field(&RELICS).iter().sum::<Value>(), 2);
        assert_eq!(obs.field(&EVENT)[Event::Vampires as usize], 1);
        assert_eq!(obs.field(&EVENT).iter().sum::<Value>(), 1);
    }

    #[test]
    fn choices_in_offer_order() {
        let gc = GameContext {
            neow: vec![
                Choice::free(Bonus::ThreeCards),
                Choice::free(Bonus::HundredGold),
                Choice::costly(Bonus::ThreeRareCards, Drawback::Curse),
                Choice::costly(Bonus::BossRelic, Drawback::LoseStarterRelic),
            ],
            ..context()
        };
        let obs = Encoder::new().observe(&gc).unwrap();
        let blocks = obs.field(&CHOICES).chunks(CHOICE_WIDTH).collect::<Vec<_>>();
        assert_eq!(blocks.len(), CHOICE_COUNT);
        assert_eq!(blocks[0][GRANTS_CARDS], 1);
        assert_eq!(blocks[1][GOLD_AMOUNT], 100);
        assert_eq!(blocks[2][GRANTS_CURSE], 1);
        assert_eq!(blocks[3][GRANTS_RELIC], 1);
        assert_eq!(blocks[3][HP_COST], 100);
    }

    #[test]
    fn missing_choices_stay_zero() {
        let gc = GameContext {
            neow: vec![Choice::free(Bonus::UpgradeCard)],
            ..context()
        };
        let obs = Encoder::new().observe(&gc).unwrap();
        assert_eq!(obs.field(&CHOICES)[UPGRADES_CARD], 1);
        assert!(obs.field(&CHOICES)[CHOICE_WIDTH..].iter().all(|v| *v == 0));
    }

    #[test]
    fn contract_violations_are_errors() {
        let encoder = Encoder::new();
        let mut gc = context();
        gc.deck.obtain(Card::from(CardId::Neutralize));
        assert!(encoder.observe(&gc).is_err());

        let gc = GameContext {
            boss: Encounter::GremlinNob,
            ..context()
        };
        assert!(encoder.observe(&gc).is_err());

        let gc = GameContext {
            neow: vec![Choice::free(Bonus::ThreeCards); 5],
            ..context()
        };
        assert!(encoder.observe(&gc).is_err());
    }

    #[test]
    fn maximum_matches_layout() {
        let max = Encoder::maximum();
        assert_eq!(max.field(&CUR_HP), &[HP_CAP]);
        assert_eq!(max.field(&MAX_HP), &[HP_CAP]);
        assert_eq!(max.field(&GOLD), &[GOLD_CAP]);
        assert_eq!(max.field(&FLOOR), &[FLOOR_CAP]);
        assert!(max.field(&BOSS).iter().all(|v| *v == 1));
        assert!(max.field(&CARDS).iter().all(|v| *v == CARD_COUNT_CAP));
        assert!(max.field(&RELICS).iter().all(|v| *v == 1));
        assert!(max.field(&EVENT).iter().all(|v| *v == 1));
        assert!(max
            .field(&CHOICES)
            .chunks(CHOICE_WIDTH)
            .all(|block| block == CHOICE_CEILING));
        assert_eq!(max.field(&RESERVED), &[0; 4]);
    }

    #[test]
    fn reserved_tail_stays_zero() {
        let mut gc = context();
        gc.neow = vec![Choice::free(Bonus::HundredGold); CHOICE_COUNT];
        let obs = Encoder::new().observe(&gc).unwrap();
        assert_eq!(obs.len(), 554);
        assert_eq!(obs.field(&RESERVED), &[0; 4]);
    }

    #[test]
    fn shared_is_one_instance() {
        assert!(std::ptr::eq(Encoder::shared(), Encoder::shared()));
    }
}
