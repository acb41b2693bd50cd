//! Configuration types for rate templates.
//!
//! This module contains the structures deserialized from rate template YAML
//! files and the fully resolved [`RateTemplate`] they produce.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{
    BillableOptions, CostConfig, CostConfigOverrides, WorkConfig, WorkConfigOverrides,
};

/// A rate template file as written on disk.
///
/// Every section is optional; absent fields take the factory defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateFile {
    /// The human-readable name of the template.
    pub name: String,
    /// A description of when the template applies.
    #[serde(default)]
    pub description: String,
    /// Cost assumptions that differ from the defaults.
    #[serde(default)]
    pub cost: CostConfigOverrides,
    /// Work-pattern assumptions that differ from the defaults.
    #[serde(default)]
    pub work: WorkConfigOverrides,
    /// Billing-inclusion policy.
    #[serde(default)]
    pub billable: BillableOptions,
}

/// A stored, fully resolved set of charge-rate assumptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTemplate {
    /// The template code (the file stem, e.g. "standard").
    pub code: String,
    /// The human-readable name of the template.
    pub name: String,
    /// A description of when the template applies.
    pub description: String,
    /// Resolved cost assumptions.
    pub cost: CostConfig,
    /// Resolved work pattern.
    pub work: WorkConfig,
    /// Billing-inclusion policy.
    pub billable: BillableOptions,
}

impl RateTemplate {
    /// Resolves a template file against the factory defaults and validates
    /// the result.
    pub fn resolve(code: impl Into<String>, file: TemplateFile) -> EngineResult<Self> {
        let template = Self {
            code: code.into(),
            name: file.name,
            description: file.description,
            cost: file.cost.apply_to(&CostConfig::default()),
            work: file.work.apply_to(&WorkConfig::default()),
            billable: file.billable,
        };
        template.cost.validate()?;
        template.work.validate()?;
        Ok(template)
    }

    /// A template built entirely from factory defaults.
    pub fn factory_default() -> Self {
        Self {
            code: DEFAULT_TEMPLATE_CODE.to_string(),
            name: "Factory defaults".to_string(),
            description: "Built-in cost, work-pattern and billing defaults".to_string(),
            cost: CostConfig::default(),
            work: WorkConfig::default(),
            billable: BillableOptions::default(),
        }
    }

    /// Returns the listing entry for this template.
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// The code of the template built from factory defaults.
pub const DEFAULT_TEMPLATE_CODE: &str = "default";

/// Listing entry for a rate template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    /// The template code.
    pub code: String,
    /// The human-readable name of the template.
    pub name: String,
    /// A description of when the template applies.
    pub description: String,
}
