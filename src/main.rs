//! WatchTonight CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use watch_tonight::cli::{
    app::{load_merged_config, run_recommend, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    options_cmd::handle_options_command,
    presenter::Presenter,
    RecommendOptions,
};
use watch_tonight::infrastructure::XdgConfigStore;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command.take() {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Options) => {
            handle_options_command(&presenter);
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Merge config
    let config = load_merged_config(cli.to_config()).await;

    let record = match config.preference_record(cli.free_text()) {
        Ok(record) => record,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = RecommendOptions {
        record,
        model: config.model_or_default().to_string(),
        print_prompt: cli.print_prompt,
        raw: cli.raw,
    };

    run_recommend(options, &config).await
}
