//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Gemini API and the
//! XDG config directory.

pub mod config;
pub mod generation;

// Re-export adapters
pub use config::XdgConfigStore;
pub use generation::GeminiGenerator;
