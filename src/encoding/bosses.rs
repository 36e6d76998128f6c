use crate::BOSS_COUNT;
use crate::game::Encounter;
use std::collections::BTreeMap;

/// Boss encounter to boss-block slot. Exactly ten bosses are encodable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossSlots(BTreeMap<Encounter, usize>);

impl Default for BossSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl BossSlots {
    pub fn new() -> Self {
        let table = Self(BTreeMap::from([
            (Encounter::SlimeBoss, 0),
            (Encounter::Hexaghost, 1),
            (Encounter::TheGuardian, 2),
            (Encounter::Champ, 3),
            (Encounter::Automaton, 4),
            (Encounter::Collector, 5),
            (Encounter::TimeEater, 6),
            (Encounter::DonuAndDeca, 7),
            (Encounter::AwakenedOne, 8),
            (Encounter::TheHeart, 9),
        ]));
        debug_assert_eq!(table.0.len(), BOSS_COUNT);
        log::debug!("built boss slot table ({} slots)", table.0.len());
        table
    }

    pub fn slot(&self, boss: Encounter) -> anyhow::Result<usize> {
        self.0
            .get(&boss)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("encounter {} is not an encodable boss", boss))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cover_block() {
        let bosses = BossSlots::new();
        let mut slots = Encounter::bosses()
            .iter()
            .map(|b| bosses.slot(*b).unwrap())
            .collect::<Vec<_>>();
        slots.sort();
        assert_eq!(slots, (0..BOSS_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn slots_follow_boss_order() {
        let bosses = BossSlots::new();
        assert!(Encounter::bosses()
            .iter()
            .enumerate()
            .all(|(i, b)| bosses.slot(*b).unwrap() == i));
    }

    #[test]
    fn non_boss_is_refused() {
        let bosses = BossSlots::new();
        assert!(bosses.slot(Encounter::Lagavulin).is_err());
        assert!(bosses.slot(Encounter::Invalid).is_err());
    }
}
