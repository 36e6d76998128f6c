pub mod context;
pub use context::*;

pub mod encounter;
pub use encounter::*;

pub mod event;
pub use event::*;

pub mod neow;
pub use neow::*;

pub mod relic;
pub use relic::*;
