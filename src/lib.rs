pub mod agent;
pub mod config;
pub mod credentials;
pub mod gemini;
pub mod output;
pub mod prompts;
pub mod search;
