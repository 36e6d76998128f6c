use super::color::Color;
use serde::Deserialize;
use serde::Serialize;

/// Size of the closed card id enumeration, INVALID included.
pub const CARD_ID_COUNT: usize = 372;

/// Expands one row per card into the `CardId` enum together with its
/// display name and color lookups. Rows must stay sorted by display name;
/// the discriminant of each variant is its engine id.
macro_rules! catalog {
    ($($variant:ident = $name:literal => $color:ident,)*) => {
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u16)]
        pub enum CardId {
            $($variant,)*
        }

        impl CardId {
            /// every id in ascending order
            pub const fn all() -> &'static [Self] {
                &[$(Self::$variant,)*]
            }
            /// engine display name, e.g. `STRIKE_RED`
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
            pub const fn color(&self) -> Color {
                match self {
                    $(Self::$variant => Color::$color,)*
                }
            }
        }
    };
}

catalog! {
    Invalid = "INVALID" => Invalid,
    Accuracy = "ACCURACY" => Green,
    Acrobatics = "ACROBATICS" => Green,
    Adrenaline = "ADRENALINE" => Green,
    AfterImage = "AFTER_IMAGE" => Green,
    Aggregate = "AGGREGATE" => Blue,
    Alchemize = "ALCHEMIZE" => Green,
    AllForOne = "ALL_FOR_ONE" => Blue,
    AllOutAttack = "ALL_OUT_ATTACK" => Green,
    Alpha = "ALPHA" => Purple,
    Amplify = "AMPLIFY" => Blue,
    Anger = "ANGER" => Red,
    Apotheosis = "APOTHEOSIS" => Colorless,
    Apparition = "APPARITION" => Colorless,
    Armaments = "ARMAMENTS" => Red,
    AscendersBane = "ASCENDERS_BANE" => Curse,
    AutoShields = "AUTO_SHIELDS" => Blue,
    AThousandCuts = "A_THOUSAND_CUTS" => Green,
    Backflip = "BACKFLIP" => Green,
    Backstab = "BACKSTAB" => Green,
    BallLightning = "BALL_LIGHTNING" => Blue,
    BandageUp = "BANDAGE_UP" => Colorless,
    Bane = "BANE" => Green,
    Barrage = "BARRAGE" => Blue,
    Barricade = "BARRICADE" => Red,
    Bash = "BASH" => Red,
    BattleHymn = "BATTLE_HYMN" => Purple,
    BattleTrance = "BATTLE_TRANCE" => Red,
    BeamCell = "BEAM_CELL" => Blue,
    BecomeAlmighty = "BECOME_ALMIGHTY" => Colorless,
    Berserk = "BERSERK" => Red,
    Beta = "BETA" => Colorless,
    BiasedCognition = "BIASED_COGNITION" => Blue,
    Bite = "BITE" => Colorless,
    BladeDance = "BLADE_DANCE" => Green,
    Blasphemy = "BLASPHEMY" => Purple,
    Blind = "BLIND" => Colorless,
    Blizzard = "BLIZZARD" => Blue,
    Bloodletting = "BLOODLETTING" => Red,
    BloodForBlood = "BLOOD_FOR_BLOOD" => Red,
    Bludgeon = "BLUDGEON" => Red,
    Blur = "BLUR" => Green,
    BodySlam = "BODY_SLAM" => Red,
    BootSequence = "BOOT_SEQUENCE" => Blue,
    BouncingFlask = "BOUNCING_FLASK" => Green,
    BowlingBash = "BOWLING_BASH" => Purple,
    Brilliance = "BRILLIANCE" => Purple,
    Brutality = "BRUTALITY" => Red,
    Buffer = "BUFFER" => Blue,
    BulletTime = "BULLET_TIME" => Green,
    Bullseye = "BULLSEYE" => Blue,
    Burn = "BURN" => Status,
    BurningPact = "BURNING_PACT" => Red,
    Burst = "BURST" => Green,
    CalculatedGamble = "CALCULATED_GAMBLE" => Green,
    Caltrops = "CALTROPS" => Green,
    Capacitor = "CAPACITOR" => Blue,
    Carnage = "CARNAGE" => Red,
    CarveReality = "CARVE_REALITY" => Purple,
    Catalyst = "CATALYST" => Green,
    Chaos = "CHAOS" => Blue,
    ChargeBattery = "CHARGE_BATTERY" => Blue,
    Chill = "CHILL" => Blue,
    Choke = "CHOKE" => Green,
    Chrysalis = "CHRYSALIS" => Colorless,
    Clash = "CLASH" => Red,
    Claw = "CLAW" => Blue,
    Cleave = "CLEAVE" => Red,
    CloakAndDagger = "CLOAK_AND_DAGGER" => Green,
    Clothesline = "CLOTHESLINE" => Red,
    Clumsy = "CLUMSY" => Curse,
    ColdSnap = "COLD_SNAP" => Blue,
    Collect = "COLLECT" => Purple,
    Combust = "COMBUST" => Red,
    CompileDriver = "COMPILE_DRIVER" => Blue,
    Concentrate = "CONCENTRATE" => Green,
    Conclude = "CONCLUDE" => Purple,
    ConjureBlade = "CONJURE_BLADE" => Purple,
    Consecrate = "CONSECRATE" => Purple,
    Consume = "CONSUME" => Blue,
    Coolheaded = "COOLHEADED" => Blue,
    CoreSurge = "CORE_SURGE" => Blue,
    CorpseExplosion = "CORPSE_EXPLOSION" => Green,
    Corruption = "CORRUPTION" => Red,
    CreativeAi = "CREATIVE_AI" => Blue,
    Crescendo = "CRESCENDO" => Purple,
    CripplingCloud = "CRIPPLING_CLOUD" => Green,
    CrushJoints = "CRUSH_JOINTS" => Purple,
    CurseOfTheBell = "CURSE_OF_THE_BELL" => Curse,
    CutThroughFate = "CUT_THROUGH_FATE" => Purple,
    DaggerSpray = "DAGGER_SPRAY" => Green,
    DaggerThrow = "DAGGER_THROW" => Green,
    Darkness = "DARKNESS" => Blue,
    DarkEmbrace = "DARK_EMBRACE" => Red,
    DarkShackles = "DARK_SHACKLES" => Colorless,
    Dash = "DASH" => Green,
    Dazed = "DAZED" => Status,
    DeadlyPoison = "DEADLY_POISON" => Green,
    Decay = "DECAY" => Curse,
    DeceiveReality = "DECEIVE_REALITY" => Purple,
    DeepBreath = "DEEP_BREATH" => Colorless,
    DefendBlue = "DEFEND_BLUE" => Blue,
    DefendGreen = "DEFEND_GREEN" => Green,
    DefendPurple = "DEFEND_PURPLE" => Purple,
    DefendRed = "DEFEND_RED" => Red,
    Deflect = "DEFLECT" => Green,
    Defragment = "DEFRAGMENT" => Blue,
    DemonForm = "DEMON_FORM" => Red,
    DeusExMachina = "DEUS_EX_MACHINA" => Purple,
    DevaForm = "DEVA_FORM" => Purple,
    Devotion = "DEVOTION" => Purple,
    DieDieDie = "DIE_DIE_DIE" => Green,
    Disarm = "DISARM" => Red,
    Discovery = "DISCOVERY" => Colorless,
    Distraction = "DISTRACTION" => Green,
    DodgeAndRoll = "DODGE_AND_ROLL" => Green,
    DoomAndGloom = "DOOM_AND_GLOOM" => Blue,
    Doppelganger = "DOPPELGANGER" => Green,
    DoubleEnergy = "DOUBLE_ENERGY" => Blue,
    DoubleTap = "DOUBLE_TAP" => Red,
    Doubt = "DOUBT" => Curse,
    DramaticEntrance = "DRAMATIC_ENTRANCE" => Colorless,
    Dropkick = "DROPKICK" => Red,
    Dualcast = "DUALCAST" => Blue,
    DualWield = "DUAL_WIELD" => Red,
    EchoForm = "ECHO_FORM" => Blue,
    Electrodynamics = "ELECTRODYNAMICS" => Blue,
    EmptyBody = "EMPTY_BODY" => Purple,
    EmptyFist = "EMPTY_FIST" => Purple,
    EmptyMind = "EMPTY_MIND" => Purple,
    EndlessAgony = "ENDLESS_AGONY" => Green,
    Enlightenment = "ENLIGHTENMENT" => Colorless,
    Entrench = "ENTRENCH" => Red,
    Envenom = "ENVENOM" => Green,
    Equilibrium = "EQUILIBRIUM" => Blue,
    Eruption = "ERUPTION" => Purple,
    EscapePlan = "ESCAPE_PLAN" => Green,
    Establishment = "ESTABLISHMENT" => Purple,
    Evaluate = "EVALUATE" => Purple,
    Eviscerate = "EVISCERATE" => Green,
    Evolve = "EVOLVE" => Red,
    Exhume = "EXHUME" => Red,
    Expertise = "EXPERTISE" => Green,
    Expunger = "EXPUNGER" => Colorless,
    FameAndFortune = "FAME_AND_FORTUNE" => Colorless,
    Fasting = "FASTING" => Purple,
    FearNoEvil = "FEAR_NO_EVIL" => Purple,
    Feed = "FEED" => Red,
    FeelNoPain = "FEEL_NO_PAIN" => Red,
    FiendFire = "FIEND_FIRE" => Red,
    Finesse = "FINESSE" => Colorless,
    Finisher = "FINISHER" => Green,
    FireBreathing = "FIRE_BREATHING" => Red,
    Fission = "FISSION" => Blue,
    FlameBarrier = "FLAME_BARRIER" => Red,
    FlashOfSteel = "FLASH_OF_STEEL" => Colorless,
    Flechettes = "FLECHETTES" => Green,
    Flex = "FLEX" => Red,
    FlurryOfBlows = "FLURRY_OF_BLOWS" => Purple,
    FlyingKnee = "FLYING_KNEE" => Green,
    FlyingSleeves = "FLYING_SLEEVES" => Purple,
    FollowUp = "FOLLOW_UP" => Purple,
    Footwork = "FOOTWORK" => Green,
    ForceField = "FORCE_FIELD" => Blue,
    ForeignInfluence = "FOREIGN_INFLUENCE" => Purple,
    Foresight = "FORESIGHT" => Purple,
    Forethought = "FORETHOUGHT" => Colorless,
    Ftl = "FTL" => Blue,
    Fusion = "FUSION" => Blue,
    GeneticAlgorithm = "GENETIC_ALGORITHM" => Blue,
    GhostlyArmor = "GHOSTLY_ARMOR" => Red,
    Glacier = "GLACIER" => Blue,
    GlassKnife = "GLASS_KNIFE" => Green,
    GoodInstincts = "GOOD_INSTINCTS" => Colorless,
    GoForTheEyes = "GO_FOR_THE_EYES" => Blue,
    GrandFinale = "GRAND_FINALE" => Green,
    Halt = "HALT" => Purple,
    HandOfGreed = "HAND_OF_GREED" => Colorless,
    Havoc = "HAVOC" => Red,
    Headbutt = "HEADBUTT" => Red,
    Heatsinks = "HEATSINKS" => Blue,
    HeavyBlade = "HEAVY_BLADE" => Red,
    HeelHook = "HEEL_HOOK" => Green,
    HelloWorld = "HELLO_WORLD" => Blue,
    Hemokinesis = "HEMOKINESIS" => Red,
    Hologram = "HOLOGRAM" => Blue,
    Hyperbeam = "HYPERBEAM" => Blue,
    Immolate = "IMMOLATE" => Red,
    Impatience = "IMPATIENCE" => Colorless,
    Impervious = "IMPERVIOUS" => Red,
    Indignation = "INDIGNATION" => Purple,
    InfernalBlade = "INFERNAL_BLADE" => Red,
    InfiniteBlades = "INFINITE_BLADES" => Green,
    Inflame = "INFLAME" => Red,
    Injury = "INJURY" => Curse,
    InnerPeace = "INNER_PEACE" => Purple,
    Insight = "INSIGHT" => Colorless,
    Intimidate = "INTIMIDATE" => Red,
    IronWave = "IRON_WAVE" => Red,
    JackOfAllTrades = "JACK_OF_ALL_TRADES" => Colorless,
    Jax = "JAX" => Colorless,
    Judgment = "JUDGMENT" => Purple,
    Juggernaut = "JUGGERNAUT" => Red,
    JustLucky = "JUST_LUCKY" => Purple,
    Leap = "LEAP" => Blue,
    LegSweep = "LEG_SWEEP" => Green,
    LessonLearned = "LESSON_LEARNED" => Purple,
    LikeWater = "LIKE_WATER" => Purple,
    LimitBreak = "LIMIT_BREAK" => Red,
    LiveForever = "LIVE_FOREVER" => Colorless,
    Loop = "LOOP" => Blue,
    MachineLearning = "MACHINE_LEARNING" => Blue,
    Madness = "MADNESS" => Colorless,
    Magnetism = "MAGNETISM" => Colorless,
    Malaise = "MALAISE" => Green,
    MasterfulStab = "MASTERFUL_STAB" => Green,
    MasterOfStrategy = "MASTER_OF_STRATEGY" => Colorless,
    MasterReality = "MASTER_REALITY" => Purple,
    Mayhem = "MAYHEM" => Colorless,
    Meditate = "MEDITATE" => Purple,
    Melter = "MELTER" => Blue,
    MentalFortress = "MENTAL_FORTRESS" => Purple,
    Metallicize = "METALLICIZE" => Red,
    Metamorphosis = "METAMORPHOSIS" => Colorless,
    MeteorStrike = "METEOR_STRIKE" => Blue,
    MindBlast = "MIND_BLAST" => Colorless,
    Miracle = "MIRACLE" => Colorless,
    MultiCast = "MULTI_CAST" => Blue,
    Necronomicurse = "NECRONOMICURSE" => Curse,
    Neutralize = "NEUTRALIZE" => Green,
    Nightmare = "NIGHTMARE" => Green,
    Nirvana = "NIRVANA" => Purple,
    Normality = "NORMALITY" => Curse,
    NoxiousFumes = "NOXIOUS_FUMES" => Green,
    Offering = "OFFERING" => Red,
    Omega = "OMEGA" => Colorless,
    Omniscience = "OMNISCIENCE" => Purple,
    Outmaneuver = "OUTMANEUVER" => Green,
    Overclock = "OVERCLOCK" => Blue,
    Pain = "PAIN" => Curse,
    Panacea = "PANACEA" => Colorless,
    Panache = "PANACHE" => Colorless,
    PanicButton = "PANIC_BUTTON" => Colorless,
    Parasite = "PARASITE" => Curse,
    PerfectedStrike = "PERFECTED_STRIKE" => Red,
    Perseverance = "PERSEVERANCE" => Purple,
    PhantasmalKiller = "PHANTASMAL_KILLER" => Green,
    PiercingWail = "PIERCING_WAIL" => Green,
    PoisonedStab = "POISONED_STAB" => Green,
    PommelStrike = "POMMEL_STRIKE" => Red,
    PowerThrough = "POWER_THROUGH" => Red,
    Pray = "PRAY" => Purple,
    Predator = "PREDATOR" => Green,
    Prepared = "PREPARED" => Green,
    PressurePoints = "PRESSURE_POINTS" => Purple,
    Pride = "PRIDE" => Curse,
    Prostrate = "PROSTRATE" => Purple,
    Protect = "PROTECT" => Purple,
    Pummel = "PUMMEL" => Red,
    Purity = "PURITY" => Colorless,
    QuickSlash = "QUICK_SLASH" => Green,
    Rage = "RAGE" => Red,
    Ragnarok = "RAGNAROK" => Purple,
    Rainbow = "RAINBOW" => Blue,
    Rampage = "RAMPAGE" => Red,
    ReachHeaven = "REACH_HEAVEN" => Purple,
    Reaper = "REAPER" => Red,
    Reboot = "REBOOT" => Blue,
    Rebound = "REBOUND" => Blue,
    RecklessCharge = "RECKLESS_CHARGE" => Red,
    Recursion = "RECURSION" => Blue,
    Recycle = "RECYCLE" => Blue,
    Reflex = "REFLEX" => Green,
    Regret = "REGRET" => Curse,
    ReinforcedBody = "REINFORCED_BODY" => Blue,
    Reprogram = "REPROGRAM" => Blue,
    RiddleWithHoles = "RIDDLE_WITH_HOLES" => Green,
    RipAndTear = "RIP_AND_TEAR" => Blue,
    RitualDagger = "RITUAL_DAGGER" => Colorless,
    Rupture = "RUPTURE" => Red,
    Rushdown = "RUSHDOWN" => Purple,
    SadisticNature = "SADISTIC_NATURE" => Colorless,
    Safety = "SAFETY" => Colorless,
    Sanctity = "SANCTITY" => Purple,
    SandsOfTime = "SANDS_OF_TIME" => Purple,
    SashWhip = "SASH_WHIP" => Purple,
    Scrape = "SCRAPE" => Blue,
    Scrawl = "SCRAWL" => Purple,
    SearingBlow = "SEARING_BLOW" => Red,
    SecondWind = "SECOND_WIND" => Red,
    SecretTechnique = "SECRET_TECHNIQUE" => Colorless,
    SecretWeapon = "SECRET_WEAPON" => Colorless,
    SeeingRed = "SEEING_RED" => Red,
    Seek = "SEEK" => Blue,
    SelfRepair = "SELF_REPAIR" => Blue,
    Sentinel = "SENTINEL" => Red,
    Setup = "SETUP" => Green,
    SeverSoul = "SEVER_SOUL" => Red,
    Shame = "SHAME" => Curse,
    Shiv = "SHIV" => Colorless,
    Shockwave = "SHOCKWAVE" => Red,
    ShrugItOff = "SHRUG_IT_OFF" => Red,
    SignatureMove = "SIGNATURE_MOVE" => Purple,
    SimmeringFury = "SIMMERING_FURY" => Purple,
    Skewer = "SKEWER" => Green,
    Skim = "SKIM" => Blue,
    Slice = "SLICE" => Green,
    Slimed = "SLIMED" => Status,
    Smite = "SMITE" => Colorless,
    SneakyStrike = "SNEAKY_STRIKE" => Green,
    SpiritShield = "SPIRIT_SHIELD" => Purple,
    SpotWeakness = "SPOT_WEAKNESS" => Red,
    Stack = "STACK" => Blue,
    StaticDischarge = "STATIC_DISCHARGE" => Blue,
    SteamBarrier = "STEAM_BARRIER" => Blue,
    Storm = "STORM" => Blue,
    StormOfSteel = "STORM_OF_STEEL" => Green,
    Streamline = "STREAMLINE" => Blue,
    StrikeBlue = "STRIKE_BLUE" => Blue,
    StrikeGreen = "STRIKE_GREEN" => Green,
    StrikePurple = "STRIKE_PURPLE" => Purple,
    StrikeRed = "STRIKE_RED" => Red,
    Study = "STUDY" => Purple,
    SuckerPunch = "SUCKER_PUNCH" => Green,
    Sunder = "SUNDER" => Blue,
    Survivor = "SURVIVOR" => Green,
    SweepingBeam = "SWEEPING_BEAM" => Blue,
    SwiftStrike = "SWIFT_STRIKE" => Colorless,
    Swivel = "SWIVEL" => Purple,
    SwordBoomerang = "SWORD_BOOMERANG" => Red,
    Tactician = "TACTICIAN" => Green,
    TalkToTheHand = "TALK_TO_THE_HAND" => Purple,
    Tantrum = "TANTRUM" => Purple,
    Tempest = "TEMPEST" => Blue,
    Terror = "TERROR" => Green,
    TheBomb = "THE_BOMB" => Colorless,
    ThinkingAhead = "THINKING_AHEAD" => Colorless,
    ThirdEye = "THIRD_EYE" => Purple,
    ThroughViolence = "THROUGH_VIOLENCE" => Colorless,
    Thunderclap = "THUNDERCLAP" => Red,
    ThunderStrike = "THUNDER_STRIKE" => Blue,
    ToolsOfTheTrade = "TOOLS_OF_THE_TRADE" => Green,
    Tranquility = "TRANQUILITY" => Purple,
    Transmutation = "TRANSMUTATION" => Colorless,
    Trip = "TRIP" => Colorless,
    TrueGrit = "TRUE_GRIT" => Red,
    Turbo = "TURBO" => Blue,
    TwinStrike = "TWIN_STRIKE" => Red,
    Unload = "UNLOAD" => Green,
    Unraveling = "UNRAVELING" => Purple,
    Uppercut = "UPPERCUT" => Red,
    Vault = "VAULT" => Purple,
    Vigilance = "VIGILANCE" => Purple,
    Violence = "VIOLENCE" => Colorless,
    Void = "VOID" => Status,
    Wallop = "WALLOP" => Purple,
    Warcry = "WARCRY" => Red,
    WaveOfTheHand = "WAVE_OF_THE_HAND" => Purple,
    Weave = "WEAVE" => Purple,
    WellLaidPlans = "WELL_LAID_PLANS" => Green,
    WheelKick = "WHEEL_KICK" => Purple,
    Whirlwind = "WHIRLWIND" => Red,
    WhiteNoise = "WHITE_NOISE" => Blue,
    WildStrike = "WILD_STRIKE" => Red,
    WindmillStrike = "WINDMILL_STRIKE" => Purple,
    Wish = "WISH" => Purple,
    Worship = "WORSHIP" => Purple,
    Wound = "WOUND" => Status,
    WraithForm = "WRAITH_FORM" => Green,
    WreathOfFlame = "WREATH_OF_FLAME" => Purple,
    Writhe = "WRITHE" => Curse,
    Zap = "ZAP" => Blue,
}

const _: () = assert!(CardId::all().len() == CARD_ID_COUNT);

impl CardId {
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// u16 isomorphism
impl From<CardId> for u16 {
    fn from(id: CardId) -> u16 {
        id as u16
    }
}
impl TryFrom<u16> for CardId {
    type Error = anyhow::Error;
    fn try_from(n: u16) -> Result<Self, Self::Error> {
        Self::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("card id {} outside [0, {})", n, CARD_ID_COUNT))
    }
}

/// str isomorphism over display names
impl TryFrom<&str> for CardId {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown card name {}", s))
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_are_positions() {
        assert!(CardId::all()
            .iter()
            .enumerate()
            .all(|(i, id)| u16::from(*id) as usize == i));
    }

    #[test]
    fn bounds_of_enumeration() {
        assert_eq!(CardId::try_from(0u16).unwrap(), CardId::Invalid);
        assert_eq!(CardId::try_from(371u16).unwrap(), CardId::Zap);
        assert!(CardId::try_from(372u16).is_err());
    }

    #[test]
    fn names_sorted_after_invalid() {
        let names = CardId::all()[1..].iter().map(|id| id.name()).collect::<Vec<_>>();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bijective_name() {
        let id = CardId::PerfectedStrike;
        assert_eq!(CardId::try_from(id.name()).unwrap(), id);
    }

    #[test]
    fn ironclad_has_seventy_five_cards() {
        let n = CardId::all()
            .iter()
            .filter(|id| id.color() == Color::Red)
            .count();
        assert_eq!(n, 75);
    }
}
