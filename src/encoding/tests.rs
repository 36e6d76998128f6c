use super::*;
use crate::Arbitrary;
use crate::CARD_COUNT_CAP;
use crate::cards::Card;
use crate::cards::CardId;
use crate::game::GameContext;
use crate::map::Map;
use crate::map::TOPOLOGY_SIZE;

/// random states drawn per property
const N: usize = 256;

#[test]
fn observation_and_maximum_share_length() {
    let encoder = Encoder::new();
    let max = Encoder::maximum();
    for _ in 0..N {
        let obs = encoder.observe(&GameContext::random()).unwrap();
        assert_eq!(obs.len(), max.len());
        assert_eq!(obs.values().len(), max.values().len());
    }
}

#[test]
fn every_field_starts_where_maximum_expects() {
    let max = Encoder::maximum();
    for field in LAYOUT.iter() {
        let ceilings = (0..field.width()).map(|i| field.ceiling(i)).collect::<Vec<_>>();
        assert_eq!(max.field(field), ceilings.as_slice(), "{}", field.name());
    }
}

#[test]
fn observation_bounded_by_maximum() {
    let encoder = Encoder::new();
    let max = Encoder::maximum();
    for _ in 0..N {
        let obs = encoder.observe(&GameContext::random()).unwrap();
        for (i, (v, m)) in obs.values().iter().zip(max.values()).enumerate() {
            assert!(v <= m, "slot {} holds {} above ceiling {}", i, v, m);
        }
    }
}

#[test]
fn one_hot_blocks_have_one_bit() {
    let encoder = Encoder::new();
    for _ in 0..N {
        let obs = encoder.observe(&GameContext::random()).unwrap();
        assert_eq!(obs.field(&BOSS).iter().sum::<crate::Value>(), 1);
        assert_eq!(obs.field(&EVENT).iter().sum::<crate::Value>(), 1);
        assert!(obs.field(&RESERVED).iter().all(|v| *v == 0));
    }
}

#[test]
fn saturation_is_stable() {
    let encoder = Encoder::new();
    let card = Card::from(CardId::Inflame).upgrade();
    let index = encoder.card_index(&card).unwrap();
    let mut gc = GameContext::default();
    for _ in 0..CARD_COUNT_CAP {
        gc.deck.obtain(card);
    }
    let capped = encoder.observe(&gc).unwrap();
    gc.deck.obtain(card);
    let beyond = encoder.observe(&gc).unwrap();
    assert_eq!(capped.field(&CARDS)[index], CARD_COUNT_CAP);
    assert_eq!(capped, beyond);
}

#[test]
fn encoding_is_deterministic() {
    let gc = GameContext::random();
    assert_eq!(
        Encoder::new().observe(&gc).unwrap(),
        Encoder::shared().observe(&gc).unwrap()
    );
}

#[test]
fn normalized_observation_in_unit_range() {
    let encoder = Encoder::new();
    let max = Encoder::maximum();
    for _ in 0..N {
        let obs = encoder.observe(&GameContext::random()).unwrap();
        assert!(obs.normalized(&max).iter().all(|x| *x <= 1.0));
    }
}

#[test]
fn topology_length_independent_of_content() {
    for _ in 0..N {
        assert_eq!(Map::random().topology().len(), TOPOLOGY_SIZE);
    }
}
