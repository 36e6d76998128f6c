//! The observation layout, shared by value and maximum builders.
//!
//! | field    | width | ceiling                  |
//! |----------|-------|--------------------------|
//! | hp       | 1     | `HP_CAP`                 |
//! | max hp   | 1     | `HP_CAP`                 |
//! | gold     | 1     | `GOLD_CAP`               |
//! | floor    | 1     | `FLOOR_CAP`              |
//! | boss     | 10    | 1                        |
//! | cards    | 220   | `CARD_COUNT_CAP`         |
//! | relics   | 178   | 1                        |
//! | event    | 58    | 1                        |
//! | choices  | 80    | [`CHOICE_CEILING`] tiled |
//! | reserved | 4     | 0                        |
//!
//! The reserved tail pads the vector to `OBSERVATION_WIDTH` and is always zero.
use super::choice::CHOICE_CEILING;
use super::field::Ceiling;
use super::field::Field;
use crate::BOSS_COUNT;
use crate::CARD_COUNT_CAP;
use crate::CARD_SLOTS;
use crate::CHOICE_COUNT;
use crate::CHOICE_WIDTH;
use crate::EVENT_COUNT;
use crate::FLOOR_CAP;
use crate::GOLD_CAP;
use crate::HP_CAP;
use crate::OBSERVATION_WIDTH;
use crate::RELIC_COUNT;

pub const CUR_HP: Field = Field::first("hp", 1, Ceiling::Flat(HP_CAP));
pub const MAX_HP: Field = CUR_HP.then("max hp", 1, Ceiling::Flat(HP_CAP));
pub const GOLD: Field = MAX_HP.then("gold", 1, Ceiling::Flat(GOLD_CAP));
pub const FLOOR: Field = GOLD.then("floor", 1, Ceiling::Flat(FLOOR_CAP));
pub const BOSS: Field = FLOOR.then("boss", BOSS_COUNT, Ceiling::Flat(1));
pub const CARDS: Field = BOSS.then("cards", 2 * CARD_SLOTS, Ceiling::Flat(CARD_COUNT_CAP));
pub const RELICS: Field = CARDS.then("relics", RELIC_COUNT, Ceiling::Flat(1));
pub const EVENT: Field = RELICS.then("event", EVENT_COUNT, Ceiling::Flat(1));
pub const CHOICES: Field = EVENT.then(
    "choices",
    CHOICE_COUNT * CHOICE_WIDTH,
    Ceiling::Tiled(&CHOICE_CEILING),
);
pub const RESERVED: Field = CHOICES.then(
    "reserved",
    OBSERVATION_WIDTH - CHOICES.end(),
    Ceiling::Flat(0),
);

/// every field, in vector order
pub const LAYOUT: [Field; 10] = [
    CUR_HP, MAX_HP, GOLD, FLOOR, BOSS, CARDS, RELICS, EVENT, CHOICES, RESERVED,
];

pub const OBSERVATION_SIZE: usize = RESERVED.end();

const fn contiguous(layout: &[Field]) -> bool {
    let mut i = 0;
    let mut offset = 0;
    while i < layout.len() {
        if layout[i].offset() != offset {
            return false;
        }
        offset += layout[i].width();
        i += 1;
    }
    offset == OBSERVATION_SIZE
}

const _: () = assert!(contiguous(&LAYOUT));
const _: () = assert!(OBSERVATION_SIZE == 554);

/// look a field up by name
pub fn field(name: &str) -> Option<&'static Field> {
    LAYOUT.iter().find(|f| f.name() == name)
}
