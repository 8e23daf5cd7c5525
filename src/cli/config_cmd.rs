//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::parse_all;
use crate::domain::error::{ConfigError, InvalidOptionError};
use crate::domain::preferences::{
    CatalogOption, Language, Mood, Platform, TimeAvailable, WatchingWith,
};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "model" => config.model = Some(value.trim().to_string()),
        "mood" => config.mood = Some(canonical::<Mood>(key, value)?),
        "time" => config.time = Some(canonical::<TimeAvailable>(key, value)?),
        "watching_with" => config.watching_with = Some(canonical::<WatchingWith>(key, value)?),
        "platforms" => config.platforms = Some(canonical_list::<Platform>(key, value)?),
        "languages" => config.languages = Some(canonical_list::<Language>(key, value)?),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, display_value(key, value)));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "api_key" => config.api_key.map(|s| mask_api_key(&s)),
        "model" => config.model,
        "mood" => config.mood,
        "time" => config.time,
        "watching_with" => config.watching_with,
        "platforms" => config.platforms.map(|v| v.join(",")),
        "languages" => config.languages.map(|v| v.join(",")),
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    let api_key = config.api_key.as_deref().map(mask_api_key);
    let platforms = config.platforms.as_ref().map(|v| v.join(","));
    let languages = config.languages.as_ref().map(|v| v.join(","));

    let entries = [
        ("api_key", api_key.as_deref()),
        ("model", config.model.as_deref()),
        ("mood", config.mood.as_deref()),
        ("time", config.time.as_deref()),
        ("watching_with", config.watching_with.as_deref()),
        ("platforms", platforms.as_deref()),
        ("languages", languages.as_deref()),
    ];

    for (key, value) in entries {
        presenter.key_value(key, value.unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

fn invalid(key: &str, e: InvalidOptionError) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: e.to_string(),
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "mood" => canonical::<Mood>(key, value).map(drop),
        "time" => canonical::<TimeAvailable>(key, value).map(drop),
        "watching_with" => canonical::<WatchingWith>(key, value).map(drop),
        "platforms" => canonical_list::<Platform>(key, value).map(drop),
        "languages" => canonical_list::<Language>(key, value).map(drop),
        "model" if value.trim().is_empty() => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Model name must not be empty".to_string(),
        }),
        _ => Ok(()), // api_key accepts any string
    }
}

/// Parse a catalog value and return its slug
fn canonical<T: CatalogOption>(key: &str, value: &str) -> Result<String, ConfigError> {
    T::parse_option(value)
        .map(|option| option.as_str().to_string())
        .map_err(|e| invalid(key, e))
}

/// Parse a comma-separated catalog list and return its slugs
fn canonical_list<T: CatalogOption>(key: &str, value: &str) -> Result<Vec<String>, ConfigError> {
    let items: Vec<String> = value.split(',').map(str::to_string).collect();
    let parsed = parse_all::<T>(&items).map_err(|e| invalid(key, e))?;
    Ok(parsed.iter().map(|o| o.as_str().to_string()).collect())
}

/// Value as echoed back after `config set`
fn display_value(key: &str, value: &str) -> String {
    if key == "api_key" {
        mask_api_key(value)
    } else {
        value.to_string()
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;

    #[test]
    fn mask_api_key_long() {
        assert_eq!(mask_api_key("abcdefghijklmnop"), "abcd...mnop");
    }

    #[test]
    fn mask_api_key_short() {
        assert_eq!(mask_api_key("short"), "*****");
    }

    #[test]
    fn set_echo_masks_api_key() {
        assert_eq!(display_value("api_key", "AIzaSyExampleKey1234"), "AIza...1234");
        assert_eq!(display_value("mood", "romantic"), "romantic");
    }

    #[test]
    fn validate_catalog_values() {
        assert!(validate_config_value("mood", "Romantic").is_ok());
        assert!(validate_config_value("mood", "grumpy").is_err());
        assert!(validate_config_value("time", "2-3 hours").is_ok());
        assert!(validate_config_value("watching_with", "family-kids").is_ok());
        assert!(validate_config_value("platforms", "netflix, Apple TV+").is_ok());
        assert!(validate_config_value("platforms", "netflix,hulu").is_err());
        assert!(validate_config_value("languages", "").is_ok());
        assert!(validate_config_value("model", " ").is_err());
        assert!(validate_config_value("api_key", "anything").is_ok());
    }

    #[test]
    fn canonical_stores_slugs() {
        assert_eq!(canonical::<Mood>("mood", "Sad/Need comfort").unwrap(), "sad");
        assert_eq!(
            canonical_list::<Language>("languages", "Tamil, english").unwrap(),
            vec!["tamil", "english"]
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = validate_key("genre").unwrap_err();
        assert!(err.to_string().contains("Unknown key"));
    }

    #[tokio::test]
    async fn set_persists_canonical_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "platforms", "Netflix,zee5")
            .await
            .unwrap();
        handle_set(&store, &presenter, "mood", "Happy/Celebratory")
            .await
            .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(
            config.platforms,
            Some(vec!["netflix".to_string(), "zee5".to_string()])
        );
        assert_eq!(config.mood, Some("happy".to_string()));
    }

    #[tokio::test]
    async fn set_invalid_value_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        let result = handle_set(&store, &presenter, "time", "all night").await;
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
        assert!(!store.exists());
    }
}
