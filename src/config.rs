//! Export configuration.
//!
//! Every field has a default, so an empty file (or no file at all) is a valid
//! configuration. Values are layered: optional file first, then environment
//! variables prefixed `LOANDOC` with `__` separating nested keys, e.g.
//! `LOANDOC__PRINT__DELAY_MS=400` or `LOANDOC__LOCALE__PLACEHOLDER=-`.

use loandoc_distribute::{PrintSettings, ShareSettings};
use loandoc_format::LocaleSettings;
use loandoc_model::{Branding, SignatureBlock};
use loandoc_render_core::Theme;
use loandoc_render_lopdf::PageGeometry;
use loandoc_types::{Margins, PageSize};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "LOANDOC";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub brand: Branding,
    pub theme: Theme,
    pub page: PageConfig,
    pub locale: LocaleSettings,
    pub print: PrintSettings,
    pub share: ShareSettings,
    pub signature: SignatureBlock,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub size: PageSize,
    pub margins: Margins,
}

impl PageConfig {
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.size, self.margins)
    }
}

impl ExportConfig {
    /// Loads the optional file at `path`, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            log::debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));
        builder.build()?.try_deserialize()
    }

    /// Loads configuration from a file only, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }
}
