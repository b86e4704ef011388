//! Storage adapters implementing the repository traits.

pub mod games_memory;

pub use games_memory::InMemoryGameStore;
