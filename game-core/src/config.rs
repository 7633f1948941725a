use anyhow::{Result, anyhow};
use game_types::{Difficulty, GameSettings, is_valid_word_length};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub words_directory: PathBuf,
    pub gameplay_words_file: String,
    pub validation_words_file: String,
    pub min_words_per_list: usize,
    pub default_difficulty: Difficulty,
    pub default_word_length: usize,
    pub auto_submit: bool,
}

impl Config {
    /// Read settings from the environment, falling back to defaults for
    /// unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            words_directory: lookup("WORDS_DIRECTORY")
                .map(PathBuf::from)
                .unwrap_or(defaults.words_directory),
            gameplay_words_file: lookup("GAMEPLAY_WORDS_FILE")
                .unwrap_or(defaults.gameplay_words_file),
            validation_words_file: lookup("VALIDATION_WORDS_FILE")
                .unwrap_or(defaults.validation_words_file),
            min_words_per_list: parse_var(
                &lookup,
                "MIN_WORDS_PER_LIST",
                defaults.min_words_per_list,
            )?,
            default_difficulty: parse_var(
                &lookup,
                "DEFAULT_DIFFICULTY",
                defaults.default_difficulty,
            )?,
            default_word_length: parse_var(
                &lookup,
                "DEFAULT_WORD_LENGTH",
                defaults.default_word_length,
            )?,
            auto_submit: parse_var(&lookup, "AUTO_SUBMIT", defaults.auto_submit)?,
        };

        if !is_valid_word_length(config.default_word_length) {
            return Err(anyhow!(
                "Invalid DEFAULT_WORD_LENGTH: {} (expected 3-14)",
                config.default_word_length
            ));
        }

        Ok(config)
    }

    pub fn default_settings(&self) -> GameSettings {
        GameSettings {
            difficulty: self.default_difficulty,
            word_length: self.default_word_length,
            auto_submit: self.auto_submit,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_directory: PathBuf::from("./assets/words"),
            gameplay_words_file: "common-words.json".to_string(),
            validation_words_file: "all-words.json".to_string(),
            min_words_per_list: 1,
            default_difficulty: Difficulty::Medium,
            default_word_length: 5,
            auto_submit: false,
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid {}: {} ({})", key, raw, e)),
        None => Ok(default),
    }
}
