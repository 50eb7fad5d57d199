//! Settings for the binary and the HTTP realizer.
//!
//! Sources, later ones winning: built-in defaults, an optional TOML file,
//! then `PHRASAL_*` environment variables (`PHRASAL_SERVER_URL=...`).

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::realizer::DEFAULT_SERVER_URL;

pub const DEFAULT_FILE: &str = "phrasal.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub server_url: String,
    /// Used for trees that carry no language of their own.
    pub language: String,
    /// Starting column of indented output, negative for single lines.
    pub indent: i32,
    pub log_level: String,
    /// Whether the binary sends its trees to the engine.
    pub realize: bool,
}

impl Settings {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };
        let settings = Config::builder()
            .set_default("server_url", DEFAULT_SERVER_URL)?
            .set_default("language", "en")?
            .set_default("indent", 0)?
            .set_default("log_level", "warn")?
            .set_default("realize", false)?
            .add_source(file)
            .add_source(Environment::with_prefix("PHRASAL"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_owned(),
            language: "en".to_owned(),
            indent: 0,
            log_level: "warn".to_owned(),
            realize: false,
        }
    }
}
