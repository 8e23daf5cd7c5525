//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod ports;
pub mod recommend;

// Re-export use cases
pub use recommend::{RecommendCallbacks, RecommendError, RecommendMoviesUseCase, RecommendOutput};
