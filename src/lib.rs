pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{toml_config::RouletteConfig, CliConfig};
pub use crate::core::{
    matching::PairingEngine,
    pipeline::CsvRoulettePipeline,
    roulette::{RouletteEngine, RunReport},
    shuffle::{PreserveOrder, RandomShuffler, Shuffler},
};
pub use crate::utils::error::{Result, RouletteError};
