//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::config::{AppConfig, FreeText};

/// Shown below `--help`
const TIPS: &str = "Tips for better recommendations:
  - Be specific about your mood
  - Mention movies you've seen and liked in --context
  - Put deal-breakers in --avoid
  - The more context, the better the match!

Run 'watch-tonight options' to see every accepted value.";

/// WatchTonight - what should I watch tonight?
#[derive(Parser, Debug)]
#[command(name = "watch-tonight")]
#[command(version)]
#[command(about = "Personalized movie recommendations for tonight using Google Gemini")]
#[command(after_help = TIPS)]
pub struct Cli {
    /// Your mood (e.g. relaxed, romantic, "Sad/Need comfort")
    #[arg(short = 'm', long, value_name = "MOOD")]
    pub mood: Option<String>,

    /// Time you have (under-1.5h, 1.5-2h, 2-3h, over-3h)
    #[arg(short = 't', long, value_name = "TIME")]
    pub time: Option<String>,

    /// Who you are watching with (e.g. alone, partner, friends)
    #[arg(short = 'w', long = "with", value_name = "COMPANION")]
    pub watching_with: Option<String>,

    /// Streaming platform you have (repeatable or comma-separated)
    #[arg(short = 'p', long = "platform", value_name = "PLATFORM", value_delimiter = ',')]
    pub platforms: Vec<String>,

    /// Preferred language (repeatable or comma-separated)
    #[arg(short = 'l', long = "language", value_name = "LANGUAGE", value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Genre preferences, free text (e.g. "thriller, comedy")
    #[arg(short = 'g', long, value_name = "TEXT")]
    pub genre: Option<String>,

    /// Anything to avoid, free text (e.g. "horror, sad endings")
    #[arg(short = 'a', long, value_name = "TEXT")]
    pub avoid: Option<String>,

    /// Any other preferences or context (e.g. "My favorite actor is Vijay")
    #[arg(short = 'c', long, value_name = "TEXT")]
    pub context: Option<String>,

    /// Gemini model to use
    #[arg(long, value_name = "MODEL", env = "WATCH_TONIGHT_MODEL")]
    pub model: Option<String>,

    /// Print the prompt instead of calling the API
    #[arg(long)]
    pub print_prompt: bool,

    /// Print the model's answer without heading formatting
    #[arg(long, conflicts_with = "print_prompt")]
    pub raw: bool,

    /// Show debug logs on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Configuration layer contributed by command-line flags
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            api_key: None, // API key comes from env/file only
            model: self.model.clone(),
            mood: self.mood.clone(),
            time: self.time.clone(),
            watching_with: self.watching_with.clone(),
            platforms: non_empty(&self.platforms),
            languages: non_empty(&self.languages),
        }
    }

    /// Free-text answers
    pub fn free_text(&self) -> FreeText {
        FreeText {
            genre_preferences: self.genre.clone(),
            avoid: self.avoid.clone(),
            additional_context: self.context.clone(),
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List accepted values for every option
    Options,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value (lists are comma-separated)
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "model",
    "mood",
    "time",
    "watching_with",
    "platforms",
    "languages",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["watch-tonight"]);
        assert!(cli.mood.is_none());
        assert!(cli.time.is_none());
        assert!(cli.watching_with.is_none());
        assert!(cli.platforms.is_empty());
        assert!(cli.languages.is_empty());
        assert!(!cli.print_prompt);
        assert!(!cli.raw);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_preferences() {
        let cli = Cli::parse_from([
            "watch-tonight",
            "-m",
            "romantic",
            "-t",
            "2-3h",
            "--with",
            "partner",
            "-c",
            "favorite actor Shah Rukh Khan",
        ]);
        assert_eq!(cli.mood.as_deref(), Some("romantic"));
        assert_eq!(cli.time.as_deref(), Some("2-3h"));
        assert_eq!(cli.watching_with.as_deref(), Some("partner"));
        assert_eq!(cli.context.as_deref(), Some("favorite actor Shah Rukh Khan"));
    }

    #[test]
    fn cli_parses_repeated_and_delimited_lists() {
        let cli = Cli::parse_from([
            "watch-tonight",
            "-p",
            "netflix,zee5",
            "--platform",
            "sonyliv",
            "-l",
            "hindi",
        ]);
        assert_eq!(cli.platforms, vec!["netflix", "zee5", "sonyliv"]);
        assert_eq!(cli.languages, vec!["hindi"]);
    }

    #[test]
    fn raw_conflicts_with_print_prompt() {
        let result = Cli::try_parse_from(["watch-tonight", "--raw", "--print-prompt"]);
        assert!(result.is_err());
    }

    #[test]
    fn to_config_leaves_unset_fields_empty() {
        let cli = Cli::parse_from(["watch-tonight", "-m", "happy"]);
        let config = cli.to_config();
        assert_eq!(config.mood, Some("happy".to_string()));
        assert!(config.api_key.is_none());
        assert!(config.platforms.is_none());
        assert!(config.languages.is_none());
    }

    #[test]
    fn free_text_carries_answers() {
        let cli = Cli::parse_from(["watch-tonight", "-g", "thriller", "-a", "gore"]);
        let text = cli.free_text();
        assert_eq!(text.genre_preferences.as_deref(), Some("thriller"));
        assert_eq!(text.avoid.as_deref(), Some("gore"));
        assert!(text.additional_context.is_none());
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["watch-tonight", "config", "set", "mood", "sad"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "mood");
            assert_eq!(value, "sad");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn cli_parses_options() {
        let cli = Cli::parse_from(["watch-tonight", "options"]);
        assert!(matches!(cli.command, Some(Commands::Options)));
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("languages"));
        assert!(!is_valid_config_key("genre"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
