pub mod splitter_config;

pub use splitter_config::*;
