pub mod provider;
pub mod client;
pub mod error;
pub mod google;
pub mod anthropic;
pub mod openai;
pub mod factory;
