pub mod map;
pub use map::*;

pub mod node;
pub use node::*;

pub mod room;
pub use room::*;

pub mod topology;
pub use topology::*;
