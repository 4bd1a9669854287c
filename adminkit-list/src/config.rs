//! List builder configuration using Figment
//!
//! Sources in precedence order (later override earlier):
//! 1. The standard type table
//! 2. An optional YAML file
//! 3. Environment variables prefixed `ADMINKIT_LIST_`, nested with `__`
//!    (`ADMINKIT_LIST_TEMPLATES__BOOLEAN=custom/bool.html`)

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::ENV_PREFIX;
use crate::error::Result;
use crate::templates::{standard_templates, TemplateMap};

/// Configuration of a `ListBuilder`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListBuilderConfig {
    /// Template path per display type.
    #[serde(default)]
    pub templates: IndexMap<String, String>,
}

impl Default for ListBuilderConfig {
    fn default() -> Self {
        Self {
            templates: standard_templates(),
        }
    }
}

impl ListBuilderConfig {
    /// Load from defaults, the optional YAML file and the environment.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(file).extract()?;
        debug!(templates = config.templates.len(), "list builder configuration loaded");
        Ok(config)
    }

    /// Load from defaults and a YAML document, ignoring the environment.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::string(yaml))
            .extract()?;
        Ok(config)
    }

    /// The layered sources, for callers that want to merge more providers.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            if !path.exists() {
                warn!(path = %path.display(), "list builder configuration file not found");
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Freeze the template table for a builder.
    pub fn template_map(&self) -> TemplateMap {
        TemplateMap::from(self.templates.clone())
    }
}
