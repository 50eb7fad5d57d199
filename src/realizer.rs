//! Boundary with the realization engine.
//!
//! The engine (a jsRealB server, started with `node .../jsRealB-server.js`)
//! turns a serialized tree into text. This module only ships the text over
//! and classifies the answer: it neither retries nor interprets further.

use std::time::Duration;

use tracing::{debug, warn};

use crate::construct::Constituent;
use crate::error::{PhrasalError, Result};
use crate::settings::Settings;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8081";

/// The engine embeds this marker in its answer when it could not realize an
/// expression.
pub const ERROR_MARKER: &str = "Erroneous realization from jsRealB expression";

/// Which serialization is handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Form {
    #[default]
    Expression,
    Structured,
}

pub trait Realizer {
    /// Realizes a serialized tree in `language`.
    fn realize(&self, expression: &str, language: &str) -> Result<String>;
}

pub struct HttpRealizer {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpRealizer {
    pub fn new(url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| PhrasalError::Unreachable {
                url: url.to_owned(),
                message: e.to_string(),
            })?;
        Ok(Self {
            url: url.to_owned(),
            client,
        })
    }
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.server_url)
    }
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Realizer for HttpRealizer {
    fn realize(&self, expression: &str, language: &str) -> Result<String> {
        debug!(url = %self.url, language, length = expression.len(), "sending expression");
        let unreachable = |e: reqwest::Error| {
            warn!(url = %self.url, error = %e, "realization engine not reachable");
            PhrasalError::Unreachable {
                url: self.url.clone(),
                message: e.to_string(),
            }
        };
        let body = self
            .client
            .get(&self.url)
            .query(&[("lang", language), ("exp", expression)])
            .send()
            .map_err(unreachable)?
            .text()
            .map_err(unreachable)?;
        interpret_response(body)
    }
}

/// Separates rendered text from an error reported inside the engine's answer.
pub fn interpret_response(body: String) -> Result<String> {
    if body.contains(ERROR_MARKER) {
        Err(PhrasalError::Realization(body))
    } else {
        Ok(body)
    }
}

/// Serializes `tree` in `form` and hands it to `realizer`, in the language of
/// the tree or else `default_language`.
///
/// Unlike `Display`, this never falls back to the structured form: a tree that
/// cannot be printed as an expression fails with
/// [`PhrasalError::Serialization`] before anything is sent.
pub fn realize_tree<R, C>(realizer: &R, tree: &C, form: Form, default_language: &str) -> Result<String>
where
    R: Realizer + ?Sized,
    C: Constituent,
{
    let text = match form {
        Form::Expression => tree.to_expression_form(-1)?,
        Form::Structured => tree.to_structured_form(-1),
    };
    let language = tree.language().unwrap_or_else(|| default_language.to_owned());
    realizer.realize(&text, &language)
}
