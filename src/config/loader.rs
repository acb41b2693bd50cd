//! Rate template loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate templates
//! from a directory of YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RateTemplate, TemplateFile, TemplateSummary};

/// Loads and provides access to rate templates.
///
/// Every `*.yaml` file in the template directory becomes one template keyed
/// by its file stem:
///
/// ```text
/// config/templates/
/// ├── standard.yaml        # Full-time trade apprentice
/// ├── four_day_week.yaml   # Compressed roster
/// └── civil_outdoor.yaml   # Weather-exposed civil works
/// ```
///
/// # Example
///
/// ```no_run
/// use charge_rate_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/templates").unwrap();
/// let template = loader.get_template("standard").unwrap();
/// println!("Template: {}", template.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    templates: BTreeMap<String, RateTemplate>,
}

impl Default for ConfigLoader {
    /// A loader holding only the factory-default template.
    fn default() -> Self {
        Self::from_templates(vec![RateTemplate::factory_default()])
    }
}

impl ConfigLoader {
    /// Loads every template in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The directory is missing or contains no `*.yaml` files
    /// - Any file contains invalid YAML or unknown fields
    /// - Any resolved template fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let dir_str = path.display().to_string();

        if !path.is_dir() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(path).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut templates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let file_path = entry.path();
            if !file_path.extension().is_some_and(|ext| ext == "yaml") {
                continue;
            }
            let Some(code) = file_path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let file = Self::load_yaml::<TemplateFile>(&file_path)?;
            let template =
                RateTemplate::resolve(code, file).map_err(|e| EngineError::ConfigParseError {
                    path: file_path.display().to_string(),
                    message: e.to_string(),
                })?;
            templates.push(template);
        }

        if templates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no template files found)", dir_str),
            });
        }

        Ok(Self::from_templates(templates))
    }

    /// Builds a loader from already resolved templates.
    pub fn from_templates(templates: Vec<RateTemplate>) -> Self {
        Self {
            templates: templates
                .into_iter()
                .map(|template| (template.code.clone(), template))
                .collect(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Gets a template by its code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use charge_rate_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/templates")?;
    /// let template = loader.get_template("civil_outdoor")?;
    /// println!("Adverse weather days: {}", template.cost.adverse_weather_days);
    /// # Ok::<(), charge_rate_engine::error::EngineError>(())
    /// ```
    pub fn get_template(&self, code: &str) -> EngineResult<&RateTemplate> {
        self.templates
            .get(code)
            .ok_or_else(|| EngineError::TemplateNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the template used when a request names none.
    ///
    /// This is `standard` if loaded, then `default`, then the first template
    /// by code.
    pub fn default_template(&self) -> Option<&RateTemplate> {
        self.templates
            .get("standard")
            .or_else(|| self.templates.get(super::DEFAULT_TEMPLATE_CODE))
            .or_else(|| self.templates.values().next())
    }

    /// Returns listing entries for all templates, ordered by code.
    pub fn summaries(&self) -> Vec<TemplateSummary> {
        self.templates.values().map(RateTemplate::summary).collect()
    }
}
