//! Runtime configuration.
//!
//! The only knob is the debug switch. Pages may override it with a JSON block:
//!
//! ```html
//! <script type="application/json" data-folio-config>{"debug": false}</script>
//! ```

use serde::Deserialize;

use crate::dom::{Document, Element};
use crate::markers;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config block is not valid JSON or has unknown fields.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Emit verbose diagnostics for every binding attempt and filter application.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { debug: true }
    }
}

impl Config {
    /// Parse a JSON config block. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the config block from the page, if present.
    pub fn from_document<D: Document>(doc: &D) -> Result<Self, ConfigError> {
        match doc.query(markers::CONFIG) {
            Some(block) => Self::from_json(&block.text_content()),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
