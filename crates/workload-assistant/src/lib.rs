//! Workload Assistant - advisory text generation
//!
//! Suggestions produced here are non-binding: they are shown to the operator
//! and never written to storage. Every call degrades to an empty value when
//! no generator is configured or the service fails.

pub mod advisor;
pub mod config;
pub mod errors;
pub mod generator;
pub mod groq;

pub use advisor::Assistant;
pub use config::AssistantConfig;
pub use errors::AssistantError;
pub use generator::TextGenerator;
pub use groq::GroqClient;
