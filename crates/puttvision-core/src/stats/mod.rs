//! Thread-safe snapshot store over the lifecycle engine's mutable state.

mod store;

pub use store::{StatsStore, TickSnapshot};
