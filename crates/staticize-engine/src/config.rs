//! Pass configuration, loaded from the `[staticize]` table of a TOML file.
//!
//! ```toml
//! [staticize]
//! reorder-modifiers = true
//! dry-run = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rewrite::ModifierOrder;

/// Options for one run of the pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PassConfig {
    /// Sort the rewritten method's modifiers into canonical order
    /// (`final public` becomes `public static final`). When off, `static` is
    /// inserted at its canonical position relative to the existing keywords
    /// and nothing else moves.
    pub reorder_modifiers: bool,
    /// Report eligible methods but return the unit unchanged.
    pub dry_run: bool,
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            reorder_modifiers: true,
            dry_run: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    staticize: Option<PassConfig>,
}

impl PassConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `[staticize]` table out of a TOML document. A document
    /// without the table yields the defaults; other tables are ignored.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let manifest: Manifest = toml::from_str(source)?;
        Ok(manifest.staticize.unwrap_or_default())
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// How the rewriter should place the inserted modifier.
    pub fn modifier_order(&self) -> ModifierOrder {
        if self.reorder_modifiers {
            ModifierOrder::Canonical
        } else {
            ModifierOrder::Preserve
        }
    }
}
