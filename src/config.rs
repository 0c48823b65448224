use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub max_questions_per_test: usize,
    pub max_students_per_session: usize,
    pub max_writing_response_chars: usize,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            max_questions_per_test: 70,
            max_students_per_session: 200,
            max_writing_response_chars: 20_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Config::default();
        Ok(Self {
            max_questions_per_test: get_env_parse_or(
                "MAX_QUESTIONS_PER_TEST",
                defaults.max_questions_per_test,
            )?,
            max_students_per_session: get_env_parse_or(
                "MAX_STUDENTS_PER_SESSION",
                defaults.max_students_per_session,
            )?,
            max_writing_response_chars: get_env_parse_or(
                "MAX_WRITING_RESPONSE_CHARS",
                defaults.max_writing_response_chars,
            )?,
        })
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(|| Config::from_env().unwrap_or_default())
}
