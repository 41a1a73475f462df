//! Option sources implementing [`eavo_domain::ports::BatchLoader`]

pub mod memory;

pub use memory::InMemoryOptionSource;
