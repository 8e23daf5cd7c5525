//! WatchTonight - movie recommendations for tonight
//!
//! This crate turns a handful of situational preferences (mood, time,
//! company, platforms, languages and free-text wishes) into a prompt for
//! Google Gemini and renders the answer as three markdown recommendations.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Option catalogs, the preference record, prompt assembly
//!   and response formatting
//! - **Application**: The recommend use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, XDG config file)
//! - **CLI**: Command-line interface, argument parsing and presentation

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
