use serde::Deserialize;
use serde::Serialize;

/// Events the player can be standing in. The last three are question-mark
/// rooms that resolved into a fight, a shop, or a chest.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Event {
    Invalid,
    Neow,
    OminousForge,
    PleadingVagrant,
    AncientWriting,
    OldBeggar,
    BigFish,
    BonfireSpirits,
    Colosseum,
    CursedTome,
    DeadAdventurer,
    DesignerInSpire,
    Augmenter,
    Duplicator,
    FaceTrader,
    Falling,
    ForgottenAltar,
    TheDivineFountain,
    Ghosts,
    GoldenIdol,
    GoldenShrine,
    WingStatue,
    KnowingSkull,
    Lab,
    TheSsssserpent,
    LivingWall,
    MaskedBandits,
    MatchAndKeep,
    Mindbloom,
    HypnotizingColoredMushrooms,
    MysteriousSphere,
    TheNest,
    Nloth,
    NoteForYourself,
    Purifier,
    ScrapOoze,
    SecretPortal,
    SensoryStone,
    ShiningLight,
    TheCleric,
    TheJoust,
    TheLibrary,
    TheMausoleum,
    TheMoaiHead,
    TheWomanInBlue,
    TombOfLordRedMask,
    Transmorgrifier,
    UpgradeShrine,
    Vampires,
    WeMeetAgain,
    WheelOfChange,
    WindingHalls,
    WorldOfGoop,
    AccursedBlacksmith,
    BackToBasics,
    MonsterRoom,
    ShopRoom,
    TreasureRoom,
}

const _: () = assert!(Event::all().len() == crate::EVENT_COUNT);

impl Event {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Invalid,
            Self::Neow,
            Self::OminousForge,
            Self::PleadingVagrant,
            Self::AncientWriting,
            Self::OldBeggar,
            Self::BigFish,
            Self::BonfireSpirits,
            Self::Colosseum,
            Self::CursedTome,
            Self::DeadAdventurer,
            Self::DesignerInSpire,
            Self::Augmenter,
            Self::Duplicator,
            Self::FaceTrader,
            Self::Falling,
            Self::ForgottenAltar,
            Self::TheDivineFountain,
            Self::Ghosts,
            Self::GoldenIdol,
            Self::GoldenShrine,
            Self::WingStatue,
            Self::KnowingSkull,
            Self::Lab,
            Self::TheSsssserpent,
            Self::LivingWall,
            Self::MaskedBandits,
            Self::MatchAndKeep,
            Self::Mindbloom,
            Self::HypnotizingColoredMushrooms,
            Self::MysteriousSphere,
            Self::TheNest,
            Self::Nloth,
            Self::NoteForYourself,
            Self::Purifier,
            Self::ScrapOoze,
            Self::SecretPortal,
            Self::SensoryStone,
            Self::ShiningLight,
            Self::TheCleric,
            Self::TheJoust,
            Self::TheLibrary,
            Self::TheMausoleum,
            Self::TheMoaiHead,
            Self::TheWomanInBlue,
            Self::TombOfLordRedMask,
            Self::Transmorgrifier,
            Self::UpgradeShrine,
            Self::Vampires,
            Self::WeMeetAgain,
            Self::WheelOfChange,
            Self::WindingHalls,
            Self::WorldOfGoop,
            Self::AccursedBlacksmith,
            Self::BackToBasics,
            Self::MonsterRoom,
            Self::ShopRoom,
            Self::TreasureRoom,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Neow => "NEOW",
            Self::OminousForge => "OMINOUS_FORGE",
            Self::PleadingVagrant => "PLEADING_VAGRANT",
            Self::AncientWriting => "ANCIENT_WRITING",
            Self::OldBeggar => "OLD_BEGGAR",
            Self::BigFish => "BIG_FISH",
            Self::BonfireSpirits => "BONFIRE_SPIRITS",
            Self::Colosseum => "COLOSSEUM",
            Self::CursedTome => "CURSED_TOME",
            Self::DeadAdventurer => "DEAD_ADVENTURER",
            Self::DesignerInSpire => "DESIGNER_IN_SPIRE",
            Self::Augmenter => "AUGMENTER",
            Self::Duplicator => "DUPLICATOR",
            Self::FaceTrader => "FACE_TRADER",
            Self::Falling => "FALLING",
            Self::ForgottenAltar => "FORGOTTEN_ALTAR",
            Self::TheDivineFountain => "THE_DIVINE_FOUNTAIN",
            Self::Ghosts => "GHOSTS",
            Self::GoldenIdol => "GOLDEN_IDOL",
            Self::GoldenShrine => "GOLDEN_SHRINE",
            Self::WingStatue => "WING_STATUE",
            Self::KnowingSkull => "KNOWING_SKULL",
            Self::Lab => "LAB",
            Self::TheSsssserpent => "THE_SSSSSERPENT",
            Self::LivingWall => "LIVING_WALL",
            Self::MaskedBandits => "MASKED_BANDITS",
            Self::MatchAndKeep => "MATCH_AND_KEEP",
            Self::Mindbloom => "MINDBLOOM",
            Self::HypnotizingColoredMushrooms => "HYPNOTIZING_COLORED_MUSHROOMS",
            Self::MysteriousSphere => "MYSTERIOUS_SPHERE",
            Self::TheNest => "THE_NEST",
            Self::Nloth => "NLOTH",
            Self::NoteForYourself => "NOTE_FOR_YOURSELF",
            Self::Purifier => "PURIFIER",
            Self::ScrapOoze => "SCRAP_OOZE",
            Self::SecretPortal => "SECRET_PORTAL",
            Self::SensoryStone => "SENSORY_STONE",
            Self::ShiningLight => "SHINING_LIGHT",
            Self::TheCleric => "THE_CLERIC",
            Self::TheJoust => "THE_JOUST",
            Self::TheLibrary => "THE_LIBRARY",
            Self::TheMausoleum => "THE_MAUSOLEUM",
            Self::TheMoaiHead => "THE_MOAI_HEAD",
            Self::TheWomanInBlue => "THE_WOMAN_IN_BLUE",
            Self::TombOfLordRedMask => "TOMB_OF_LORD_RED_MASK",
            Self::Transmorgrifier => "TRANSMORGRIFIER",
            Self::UpgradeShrine => "UPGRADE_SHRINE",
            Self::Vampires => "VAMPIRES",
            Self::WeMeetAgain => "WE_MEET_AGAIN",
            Self::WheelOfChange => "WHEEL_OF_CHANGE",
            Self::WindingHalls => "WINDING_HALLS",
            Self::WorldOfGoop => "WORLD_OF_GOOP",
            Self::AccursedBlacksmith => "ACCURSED_BLACKSMITH",
            Self::BackToBasics => "BACK_TO_BASICS",
            Self::MonsterRoom => "MONSTER_ROOM",
            Self::ShopRoom => "SHOP_ROOM",
            Self::TreasureRoom => "TREASURE_ROOM",
        }
    }
}

/// u8 isomorphism
impl From<Event> for u8 {
    fn from(e: Event) -> u8 {
        e as u8
    }
}
impl TryFrom<u8> for Event {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("event id {} outside [0, {})", n, crate::EVENT_COUNT))
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl crate::Arbitrary for Event {
    fn random() -> Self {
        use rand::Rng;
        Self::all()[rand::rng().random_range(0..Self::all().len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        assert!(Event::all()
            .iter()
            .all(|e| Event::try_from(u8::from(*e)).unwrap() == *e));
    }

    #[test]
    fn out_of_range() {
        assert!(Event::try_from(58u8).is_err());
    }
}
