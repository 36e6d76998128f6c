use serde::Deserialize;
use serde::Serialize;

/// What a Neow option grants.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bonus {
    ThreeCards,
    OneRandomRareCard,
    RemoveCard,
    UpgradeCard,
    TransformCard,
    RandomColorless,
    ThreeSmallPotions,
    RandomCommonRelic,
    TenPercentHpBonus,
    ThreeEnemyKill,
    HundredGold,
    RandomColorless2,
    RemoveTwo,
    OneRareRelic,
    ThreeRareCards,
    TwoFiftyGold,
    TransformTwoCards,
    TwentyPercentHpBonus,
    BossRelic,
    Invalid,
}

impl Bonus {
    pub const fn all() -> &'static [Self] {
        &[
            Self::ThreeCards,
            Self::OneRandomRareCard,
            Self::RemoveCard,
            Self::UpgradeCard,
            Self::TransformCard,
            Self::RandomColorless,
            Self::ThreeSmallPotions,
            Self::RandomCommonRelic,
            Self::TenPercentHpBonus,
            Self::ThreeEnemyKill,
            Self::HundredGold,
            Self::RandomColorless2,
            Self::RemoveTwo,
            Self::OneRareRelic,
            Self::ThreeRareCards,
            Self::TwoFiftyGold,
            Self::TransformTwoCards,
            Self::TwentyPercentHpBonus,
            Self::BossRelic,
            Self::Invalid,
        ]
    }
}

/// What a Neow option costs.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Drawback {
    TenPercentHpLoss,
    NoGold,
    Curse,
    PercentDamage,
    LoseStarterRelic,
}

impl Drawback {
    pub const fn all() -> &'static [Self] {
        &[
            Self::TenPercentHpLoss,
            Self::NoGold,
            Self::Curse,
            Self::PercentDamage,
            Self::LoseStarterRelic,
        ]
    }
}

/// One of the reward options offered at the start of a run.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub bonus: Bonus,
    pub drawback: Option<Drawback>,
}

impl Choice {
    pub const fn free(bonus: Bonus) -> Self {
        Self {
            bonus,
            drawback: None,
        }
    }
    pub const fn costly(bonus: Bonus, drawback: Drawback) -> Self {
        Self {
            bonus,
            drawback: Some(drawback),
        }
    }
}

impl From<(Bonus, Option<Drawback>)> for Choice {
    fn from((bonus, drawback): (Bonus, Option<Drawback>)) -> Self {
        Self { bonus, drawback }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.drawback {
            Some(d) => write!(f, "{:?} / {:?}", self.bonus, d),
            None => write!(f, "{:?}", self.bonus),
        }
    }
}

impl crate::Arbitrary for Choice {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let bonus = Bonus::all()[rng.random_range(0..Bonus::all().len() - 1)];
        let drawback = match rng.random_bool(0.5) {
            true => Some(Drawback::all()[rng.random_range(0..Drawback::all().len())]),
            false => None,
        };
        Self { bonus, drawback }
    }
}
