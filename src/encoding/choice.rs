//! Twenty-slot feature block for one Neow reward choice.
//!
//! Amounts that the game thinks of as fractions are stored in fixed point:
//! gold as a literal amount, HP as a percentage.
use crate::CHOICE_WIDTH;
use crate::Value;
use crate::game::Bonus;
use crate::game::Choice;
use crate::game::Drawback;

// category flags
pub const GRANTS_CARDS: usize = 0;
pub const GRANTS_RELIC: usize = 1;
pub const GRANTS_GOLD: usize = 2;
pub const CHANGES_HP: usize = 3;
pub const UPGRADES_CARD: usize = 4;
pub const REMOVES_CARD: usize = 5;
pub const TRANSFORMS_CARD: usize = 6;
pub const SHOP_ACTION: usize = 7;
// binary flags
pub const GRANTS_CURSE: usize = 8;
pub const IS_UPGRADE: usize = 9;
// specific items, zero when the choice names a category only
pub const CARD_ID: usize = 10;
pub const RELIC_ID: usize = 11;
// amounts
pub const GOLD_AMOUNT: usize = 12;
pub const HP_CHANGE: usize = 13;
pub const MAX_HP_CHANGE: usize = 14;
pub const GOLD_COST: usize = 15;
pub const HP_COST: usize = 16;
// 17..20 padding

/// Per-slot ceiling of a choice block.
pub const CHOICE_CEILING: [Value; CHOICE_WIDTH] = [
    1, 1, 1, 1, 1, 1, 1, 1, // category flags
    1, 1, // curse, upgrade
    371, 177, // highest card id, highest relic id
    250, 100, 100, 1000, 100, // gold, hp change, max hp change, gold cost, hp cost
    0, 0, 0, // padding
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceFeatures([Value; CHOICE_WIDTH]);

impl ChoiceFeatures {
    pub fn values(&self) -> &[Value; CHOICE_WIDTH] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.0.iter().copied()
    }

    /// bonus contribution. overwrites, since it is applied first
    fn bonus(mut self, bonus: Bonus) -> Self {
        match bonus {
            Bonus::ThreeCards
            | Bonus::OneRandomRareCard
            | Bonus::ThreeRareCards
            | Bonus::RandomColorless
            | Bonus::RandomColorless2 => {
                self.0[GRANTS_CARDS] = 1;
            }
            Bonus::RandomCommonRelic | Bonus::OneRareRelic | Bonus::BossRelic => {
                self.0[GRANTS_RELIC] = 1;
            }
            Bonus::HundredGold => {
                self.0[GRANTS_GOLD] = 1;
                self.0[GOLD_AMOUNT] = 100;
            }
            Bonus::TwoFiftyGold => {
                self.0[GRANTS_GOLD] = 1;
                self.0[GOLD_AMOUNT] = 250;
            }
            Bonus::TenPercentHpBonus => {
                self.0[CHANGES_HP] = 1;
                self.0[MAX_HP_CHANGE] = 10;
            }
            Bonus::TwentyPercentHpBonus => {
                self.0[CHANGES_HP] = 1;
                self.0[MAX_HP_CHANGE] = 20;
            }
            Bonus::UpgradeCard => {
                self.0[UPGRADES_CARD] = 1;
            }
            Bonus::RemoveCard | Bonus::RemoveTwo => {
                self.0[REMOVES_CARD] = 1;
            }
            Bonus::TransformCard | Bonus::TransformTwoCards => {
                self.0[TRANSFORMS_CARD] = 1;
            }
            Bonus::ThreeSmallPotions | Bonus::ThreeEnemyKill | Bonus::Invalid => {}
        }
        self
    }

    /// drawback contribution, layered over the bonus. max hp change
    /// accumulates; hp change is overwritten.
    fn drawback(mut self, drawback: Option<Drawback>) -> Self {
        match drawback {
            Some(Drawback::TenPercentHpLoss) => {
                self.0[CHANGES_HP] = 1;
                self.0[MAX_HP_CHANGE] -= 10;
            }
            Some(Drawback::NoGold) | Some(Drawback::LoseStarterRelic) => {
                // a cost marker, not an hp amount
                self.0[HP_COST] = 100;
            }
            Some(Drawback::Curse) => {
                self.0[GRANTS_CURSE] = 1;
            }
            Some(Drawback::PercentDamage) => {
                self.0[CHANGES_HP] = 1;
                self.0[HP_CHANGE] = -30;
            }
            None => {}
        }
        self
    }
}

impl From<Choice> for ChoiceFeatures {
    fn from(choice: Choice) -> Self {
        Self([0; CHOICE_WIDTH])
            .bonus(choice.bonus)
            .drawback(choice.drawback)
    }
}

impl From<ChoiceFeatures> for [Value; CHOICE_WIDTH] {
    fn from(features: ChoiceFeatures) -> Self {
        features.0
    }
}
