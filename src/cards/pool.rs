use super::id::CardId;

/// Colorless cards that can be offered as rewards, in engine pool order.
/// Special colorless cards (Shiv, Miracle, Bite, ...) are not part of it.
pub const COLORLESS_POOL: [CardId; 35] = [
    CardId::BandageUp,
    CardId::Blind,
    CardId::DarkShackles,
    CardId::DeepBreath,
    CardId::Discovery,
    CardId::DramaticEntrance,
    CardId::Enlightenment,
    CardId::Finesse,
    CardId::FlashOfSteel,
    CardId::Forethought,
    CardId::GoodInstincts,
    CardId::Impatience,
    CardId::JackOfAllTrades,
    CardId::Madness,
    CardId::MindBlast,
    CardId::Panacea,
    CardId::PanicButton,
    CardId::Purity,
    CardId::SwiftStrike,
    CardId::Trip,
    CardId::Apotheosis,
    CardId::Chrysalis,
    CardId::HandOfGreed,
    CardId::Magnetism,
    CardId::MasterOfStrategy,
    CardId::Mayhem,
    CardId::Metamorphosis,
    CardId::Panache,
    CardId::SadisticNature,
    CardId::SecretTechnique,
    CardId::SecretWeapon,
    CardId::TheBomb,
    CardId::ThinkingAhead,
    CardId::Transmutation,
    CardId::Violence,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    #[test]
    fn pool_is_colorless_and_unique() {
        assert!(COLORLESS_POOL.iter().all(|id| id.color() == Color::Colorless));
        let mut ids = COLORLESS_POOL.to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), COLORLESS_POOL.len());
    }
}
