//! Command line inspection of the encoding.
use crate::Arbitrary;
use crate::cards::Card;
use crate::cards::CardId;
use crate::encoding::Encoder;
use crate::encoding::LAYOUT;
use crate::game::GameContext;
use crate::map::Map;
use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "Print the observation field layout", alias = "lay")]
    Layout,
    #[command(about = "Print the per-slot maximum vector as JSON", alias = "max")]
    Maximum,
    #[command(about = "Encode a random game state and map as JSON", alias = "smp")]
    Sample,
    #[command(about = "Find the card-block index of a card", alias = "idx")]
    Card {
        #[arg(required = true)]
        name: String,
        #[arg(long, short)]
        upgraded: bool,
    },
    #[command(about = "Draw a random map and its topology bits")]
    Map,
}

impl Query {
    pub fn run() -> anyhow::Result<()> {
        let encoder = Encoder::shared();
        match Self::parse() {
            Self::Layout => {
                for field in LAYOUT.iter() {
                    println!("{} {}", field, format!("max {}", field.ceiling(0)).dimmed());
                }
                Ok(())
            }
            Self::Maximum => {
                println!("{}", serde_json::to_string(&Encoder::maximum())?);
                Ok(())
            }
            Self::Sample => {
                let ref game = GameContext::random();
                let ref map = Map::random();
                log::info!("sampled {} cards, {} relics", game.deck.len(), game.relics.len());
                let json = serde_json::json!({
                    "observation": encoder.observe(game)?,
                    "maximum": Encoder::maximum(),
                    "topology": map.topology(),
                });
                println!("{}", json);
                Ok(())
            }
            Self::Card { name, upgraded } => {
                let id = CardId::try_from(name.to_uppercase().as_str())?;
                let card = Card::new(id, upgraded);
                let index = encoder.card_index(&card)?;
                println!("{} -> {}", card, index.to_string().green());
                Ok(())
            }
            Self::Map => {
                let map = Map::random();
                let bits = map.topology();
                println!("{}", map);
                println!(
                    "{} bits, {} set",
                    bits.len(),
                    bits.iter().filter(|b| **b == 1).count().to_string().green()
                );
                Ok(())
            }
        }
    }
}
