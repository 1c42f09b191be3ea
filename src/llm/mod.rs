mod client;
mod types;

pub use client::{LlmClient, OpenAiClient};
#[cfg(test)]
pub use client::MockLlmClient;
pub use types::*;
