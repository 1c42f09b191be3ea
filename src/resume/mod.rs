mod gateway;
mod parse;
pub mod prompts;
mod types;

pub use gateway::{CompletionGateway, CompletionSettings};
pub use parse::{parse_generation, split_suggestions};
pub use types::*;
