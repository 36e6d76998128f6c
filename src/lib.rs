//! Fixed-length observation vectors for Slay the Spire game states.
//!
//! The engine hands us a [`game::GameContext`] and a [`map::Map`]; we hand back
//! integer vectors with a layout that never changes between calls, plus a
//! parallel vector of per-slot ceilings for normalization.
pub mod cards;
#[cfg(feature = "server")]
pub mod cli;
pub mod encoding;
pub mod game;
pub mod map;

pub use encoding::Encoder;
pub use encoding::Observation;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single slot of an encoded vector.
pub type Value = i32;
/// A single bit of the map topology encoding.
pub type Bit = u8;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SATURATION CEILINGS
// Values above these are clamped, never rejected.
// ============================================================================
/// Ceiling for current and maximum HP.
pub const HP_CAP: Value = 200;
/// Ceiling for gold held.
pub const GOLD_CAP: Value = 1800;
/// Ceiling for copies of one (card, upgrade) pair in the deck.
pub const CARD_COUNT_CAP: Value = 7;
/// Policy ceiling for floor number. Not a hard game limit.
pub const FLOOR_CAP: Value = 60;

// ============================================================================
// CATEGORY BLOCK WIDTHS
// ============================================================================
/// Bosses distinguished by the boss one-hot block.
pub const BOSS_COUNT: usize = 10;
/// Individually distinguished cards (red cards then the colorless pool).
pub const CARD_SLOTS: usize = 110;
/// Relic ids are dense in [0, RELIC_COUNT).
pub const RELIC_COUNT: usize = 178;
/// Event ids are dense in [0, EVENT_COUNT).
pub const EVENT_COUNT: usize = 58;
/// Simultaneous Neow reward choices.
pub const CHOICE_COUNT: usize = 4;
/// Features per reward choice.
pub const CHOICE_WIDTH: usize = 20;
/// Declared observation length. Slots past the last field stay zero.
pub const OBSERVATION_WIDTH: usize = 554;

// ============================================================================
// MAP GEOMETRY
// ============================================================================
/// Nodes per map row.
pub const MAP_WIDTH: usize = 7;
/// Rows per act map.
pub const MAP_HEIGHT: usize = 15;
/// Room kinds distinguished by the room-type one-hot.
pub const ROOM_KINDS: usize = 6;
/// Row whose rooms are always treasure.
pub const TREASURE_ROW: usize = 8;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
