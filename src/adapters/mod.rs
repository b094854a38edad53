// Adapters layer: concrete implementations of the domain ports (filesystem, console).

pub mod prompt;
pub mod storage;
