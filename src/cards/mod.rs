pub mod card;
pub use card::*;

pub mod color;
pub use color::*;

pub mod deck;
pub use deck::*;

pub mod id;
pub use id::*;

pub mod pool;
pub use pool::*;
