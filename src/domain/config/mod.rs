//! Configuration domain module

mod app_config;

pub use app_config::{parse_all, AppConfig, FreeText, DEFAULT_MODEL};
