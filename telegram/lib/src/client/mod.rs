//! The Bot API client.
//!
//! [`BotClient`] exposes one async method per supported operation. Every
//! operation shapes its parameters and hands them to a single private
//! executor that builds the URL, logs, sends, decodes the envelope and
//! classifies failures.

mod builder;
mod executor;
mod operations;

#[cfg(test)]
mod test_support;

pub use builder::{BotClientBuilder, PayloadLogging, DEFAULT_API_URL};
pub use executor::BotClient;

/// Parameters of one API call, serialized as the JSON request body.
pub type Params = serde_json::Map<String, serde_json::Value>;
