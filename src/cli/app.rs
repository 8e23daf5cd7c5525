//! Main app runner for recommendation requests

use std::env;
use std::process::ExitCode;

use indicatif::ProgressBar;
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::application::{RecommendCallbacks, RecommendError, RecommendMoviesUseCase};
use crate::domain::config::AppConfig;
use crate::domain::preferences::PreferenceRecord;
use crate::domain::recommendation::RecommendationPrompt;
use crate::infrastructure::{GeminiGenerator, XdgConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variables checked for the API key, in order
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Shown after any generation failure
const API_KEY_HINT: &str = "Please check your API key and try again.";

/// Spinner messages for each stage of a request
const PREPARING_MESSAGE: &str = "Preparing your request...";
const GENERATING_MESSAGE: &str = "Finding perfect movies for you...";
const FORMATTING_MESSAGE: &str = "Formatting recommendations...";

/// Parsed recommendation options
#[derive(Debug, Clone)]
pub struct RecommendOptions {
    pub record: PreferenceRecord,
    pub model: String,
    pub print_prompt: bool,
    pub raw: bool,
}

/// Print the prompt for a record without calling the API
pub fn run_print_prompt(record: &PreferenceRecord) -> ExitCode {
    Presenter::new().output(RecommendationPrompt::build(record).content());
    ExitCode::from(EXIT_SUCCESS)
}

/// Run one recommendation request
pub async fn run_recommend(options: RecommendOptions, config: &AppConfig) -> ExitCode {
    if options.print_prompt {
        return run_print_prompt(&options.record);
    }

    let mut presenter = Presenter::new();

    let api_key = match config.api_key.clone().filter(|k| !k.trim().is_empty()) {
        Some(key) => key,
        None => {
            presenter.error(&RecommendError::MissingApiKey.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    debug!(model = %options.model, "using gemini model");
    let generator = GeminiGenerator::with_model(api_key, &options.model);
    let use_case = RecommendMoviesUseCase::new(generator);

    presenter.start_spinner(PREPARING_MESSAGE);
    let callbacks = spinner_callbacks(presenter.spinner_handle());

    match use_case.execute(&options.record, callbacks).await {
        Ok(output) => {
            presenter.spinner_success("Here are your personalized recommendations!");
            if options.raw {
                presenter.output(&output.raw);
            } else {
                presenter.output(&output.formatted);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            debug!(error = ?e, "recommendation request failed");
            presenter.spinner_fail("No recommendations this time");
            presenter.error(&format!("An error occurred: {}", e));
            presenter.info(API_KEY_HINT);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Drive the spinner message from the use case status callbacks
fn spinner_callbacks(spinner: Option<ProgressBar>) -> RecommendCallbacks {
    let on_start = spinner.clone();
    let on_end = spinner;

    RecommendCallbacks {
        on_generating_start: Some(Box::new(move || {
            if let Some(spinner) = &on_start {
                spinner.set_message(GENERATING_MESSAGE);
            }
        })),
        on_generating_end: Some(Box::new(move || {
            if let Some(spinner) = &on_end {
                spinner.set_message(FORMATTING_MESSAGE);
            }
        })),
    }
}

/// First non-empty API key from the environment
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|key| !key.trim().is_empty())
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            debug!(error = %e, "ignoring unreadable config file");
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        api_key: api_key_from_env(),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
