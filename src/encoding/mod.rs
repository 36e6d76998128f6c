pub mod bosses;
pub use bosses::*;

pub mod choice;
pub use choice::*;

pub mod encoder;
pub use encoder::*;

pub mod field;
pub use field::*;

pub mod layout;
pub use layout::*;

pub mod observation;
pub use observation::*;

pub mod slots;
pub use slots::*;

#[cfg(test)]
mod tests;
