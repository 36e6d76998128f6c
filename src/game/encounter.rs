use serde::Deserialize;
use serde::Serialize;

/// Monster encounters as the engine enumerates them, acts one through four.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Encounter {
    Invalid,
    Cultist,
    JawWorm,
    TwoLouse,
    SmallSlimes,
    BlueSlaver,
    GremlinGang,
    Looter,
    LargeSlime,
    LotsOfSlimes,
    ExordiumThugs,
    ExordiumWildlife,
    RedSlaver,
    ThreeLouse,
    TwoFungiBeasts,
    GremlinNob,
    Lagavulin,
    ThreeSentries,
    SlimeBoss,
    TheGuardian,
    Hexaghost,
    SphericGuardian,
    Chosen,
    ShellParasite,
    ThreeByrds,
    TwoThieves,
    ChosenAndByrds,
    SentryAndSphere,
    SnakePlant,
    Snecko,
    CenturionAndHealer,
    CultistAndChosen,
    ThreeCultists,
    ShelledParasiteAndFungi,
    GremlinLeader,
    Slavers,
    BookOfStabbing,
    Automaton,
    Collector,
    Champ,
    ThreeDarklings,
    OrbWalker,
    ThreeShapes,
    SpireGrowth,
    Transient,
    FourShapes,
    Maw,
    SphereAndTwoShapes,
    JawWormHorde,
    WrithingMass,
    GiantHead,
    Nemesis,
    Reptomancer,
    AwakenedOne,
    TimeEater,
    DonuAndDeca,
    ShieldAndSpear,
    TheHeart,
}

impl Encounter {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Invalid,
            Self::Cultist,
            Self::JawWorm,
            Self::TwoLouse,
            Self::SmallSlimes,
            Self::BlueSlaver,
            Self::GremlinGang,
            Self::Looter,
            Self::LargeSlime,
            Self::LotsOfSlimes,
            Self::ExordiumThugs,
            Self::ExordiumWildlife,
            Self::RedSlaver,
            Self::ThreeLouse,
            Self::TwoFungiBeasts,
            Self::GremlinNob,
            Self::Lagavulin,
            Self::ThreeSentries,
            Self::SlimeBoss,
            Self::TheGuardian,
            Self::Hexaghost,
            Self::SphericGuardian,
            Self::Chosen,
            Self::ShellParasite,
            Self::ThreeByrds,
            Self::TwoThieves,
            Self::ChosenAndByrds,
            Self::SentryAndSphere,
            Self::SnakePlant,
            Self::Snecko,
            Self::CenturionAndHealer,
            Self::CultistAndChosen,
            Self::ThreeCultists,
            Self::ShelledParasiteAndFungi,
            Self::GremlinLeader,
            Self::Slavers,
            Self::BookOfStabbing,
            Self::Automaton,
            Self::Collector,
            Self::Champ,
            Self::ThreeDarklings,
            Self::OrbWalker,
            Self::ThreeShapes,
            Self::SpireGrowth,
            Self::Transient,
            Self::FourShapes,
            Self::Maw,
            Self::SphereAndTwoShapes,
            Self::JawWormHorde,
            Self::WrithingMass,
            Self::GiantHead,
            Self::Nemesis,
            Self::Reptomancer,
            Self::AwakenedOne,
            Self::TimeEater,
            Self::DonuAndDeca,
            Self::ShieldAndSpear,
            Self::TheHeart,
        ]
    }
    /// the ten act bosses, in boss-block order
    pub const fn bosses() -> &'static [Self] {
        &[
            Self::SlimeBoss,
            Self::Hexaghost,
            Self::TheGuardian,
            Self::Champ,
            Self::Automaton,
            Self::Collector,
            Self::TimeEater,
            Self::DonuAndDeca,
            Self::AwakenedOne,
            Self::TheHeart,
        ]
    }
    pub fn is_boss(&self) -> bool {
        Self::bosses().contains(self)
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Cultist => "CULTIST",
            Self::JawWorm => "JAW_WORM",
            Self::TwoLouse => "TWO_LOUSE",
            Self::SmallSlimes => "SMALL_SLIMES",
            Self::BlueSlaver => "BLUE_SLAVER",
            Self::GremlinGang => "GREMLIN_GANG",
            Self::Looter => "LOOTER",
            Self::LargeSlime => "LARGE_SLIME",
            Self::LotsOfSlimes => "LOTS_OF_SLIMES",
            Self::ExordiumThugs => "EXORDIUM_THUGS",
            Self::ExordiumWildlife => "EXORDIUM_WILDLIFE",
            Self::RedSlaver => "RED_SLAVER",
            Self::ThreeLouse => "THREE_LOUSE",
            Self::TwoFungiBeasts => "TWO_FUNGI_BEASTS",
            Self::GremlinNob => "GREMLIN_NOB",
            Self::Lagavulin => "LAGAVULIN",
            Self::ThreeSentries => "THREE_SENTRIES",
            Self::SlimeBoss => "SLIME_BOSS",
            Self::TheGuardian => "THE_GUARDIAN",
            Self::Hexaghost => "HEXAGHOST",
            Self::SphericGuardian => "SPHERIC_GUARDIAN",
            Self::Chosen => "CHOSEN",
            Self::ShellParasite => "SHELL_PARASITE",
            Self::ThreeByrds => "THREE_BYRDS",
            Self::TwoThieves => "TWO_THIEVES",
            Self::ChosenAndByrds => "CHOSEN_AND_BYRDS",
            Self::SentryAndSphere => "SENTRY_AND_SPHERE",
            Self::SnakePlant => "SNAKE_PLANT",
            Self::Snecko => "SNECKO",
            Self::CenturionAndHealer => "CENTURION_AND_HEALER",
            Self::CultistAndChosen => "CULTIST_AND_CHOSEN",
            Self::ThreeCultists => "THREE_CULTISTS",
            Self::ShelledParasiteAndFungi => "SHELLED_PARASITE_AND_FUNGI",
            Self::GremlinLeader => "GREMLIN_LEADER",
            Self::Slavers => "SLAVERS",
            Self::BookOfStabbing => "BOOK_OF_STABBING",
            Self::Automaton => "AUTOMATON",
            Self::Collector => "COLLECTOR",
            Self::Champ => "CHAMP",
            Self::ThreeDarklings => "THREE_DARKLINGS",
            Self::OrbWalker => "ORB_WALKER",
            Self::ThreeShapes => "THREE_SHAPES",
            Self::SpireGrowth => "SPIRE_GROWTH",
            Self::Transient => "TRANSIENT",
            Self::FourShapes => "FOUR_SHAPES",
            Self::Maw => "MAW",
            Self::SphereAndTwoShapes => "SPHERE_AND_TWO_SHAPES",
            Self::JawWormHorde => "JAW_WORM_HORDE",
            Self::WrithingMass => "WRITHING_MASS",
            Self::GiantHead => "GIANT_HEAD",
            Self::Nemesis => "NEMESIS",
            Self::Reptomancer => "REPTOMANCER",
            Self::AwakenedOne => "AWAKENED_ONE",
            Self::TimeEater => "TIME_EATER",
            Self::DonuAndDeca => "DONU_AND_DECA",
            Self::ShieldAndSpear => "SHIELD_AND_SPEAR",
            Self::TheHeart => "THE_HEART",
        }
    }
}

impl std::fmt::Display for Encounter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl crate::Arbitrary for Encounter {
    /// uniform over bosses, the only encounters a run can be headed toward
    fn random() -> Self {
        use rand::Rng;
        Self::bosses()[rand::rng().random_range(0..Self::bosses().len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_bosses() {
        assert_eq!(Encounter::bosses().len(), crate::BOSS_COUNT);
        assert!(Encounter::bosses().iter().all(Encounter::is_boss));
    }

    #[test]
    fn elites_are_not_bosses() {
        assert!(!Encounter::GremlinNob.is_boss());
        assert!(!Encounter::Invalid.is_boss());
    }
}
