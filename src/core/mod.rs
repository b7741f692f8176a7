pub mod matching;
pub mod pipeline;
pub mod records;
pub mod roulette;
pub mod shuffle;

pub use crate::domain::model::{MatchHistory, PairKey, Person, RunInput, RunResult, Team};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
