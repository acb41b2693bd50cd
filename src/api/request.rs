//! Request types for the Charge-Rate Cost Engine API.
//!
//! This module defines the JSON request structures for the `/charge-rate`
//! and `/charge-rate/batch` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigLoader, RateTemplate};
use crate::error::EngineResult;
use crate::models::{BillableOptions, ChargeRateInput, CostConfigOverrides, WorkConfigOverrides};

/// Request body for the `/charge-rate` endpoint.
///
/// Only `pay_rate` is required. The named template (or the server's default
/// template) supplies every assumption the request leaves out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRateRequest {
    /// Identifier echoed back in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apprentice_id: Option<String>,
    /// Base hourly pay rate.
    pub pay_rate: Decimal,
    /// Code of the rate template to start from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Cost fields overriding the template.
    #[serde(default)]
    pub cost: CostConfigOverrides,
    /// Work-pattern fields overriding the template.
    #[serde(default)]
    pub work: WorkConfigOverrides,
    /// Billing policy replacing the template's policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<BillableOptions>,
    /// Margin override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Decimal>,
}

impl ChargeRateRequest {
    /// Creates a request for `pay_rate` with no overrides.
    pub fn new(pay_rate: Decimal) -> Self {
        Self {
            apprentice_id: None,
            pay_rate,
            template: None,
            cost: CostConfigOverrides::default(),
            work: WorkConfigOverrides::default(),
            billable: None,
            margin: None,
        }
    }

    /// Resolves the request against the loaded templates.
    ///
    /// Returns the code of the template used together with the complete
    /// calculation input. Fails with `TemplateNotFound` if the request names
    /// a template that is not loaded.
    pub fn resolve(&self, config: &ConfigLoader) -> EngineResult<(String, ChargeRateInput)> {
        let template = match &self.template {
            Some(code) => config.get_template(code)?.clone(),
            None => config
                .default_template()
                .cloned()
                .unwrap_or_else(RateTemplate::factory_default),
        };

        let input = ChargeRateInput {
            pay_rate: self.pay_rate,
            cost: self.cost.apply_to(&template.cost),
            work: self.work.apply_to(&template.work),
            billable: self.billable.unwrap_or(template.billable),
            margin: self.margin,
        };
        Ok((template.code, input))
    }
}

/// Request body for the `/charge-rate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// The apprentices to price, reported back in the same order.
    pub items: Vec<ChargeRateRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{CostConfig, WorkConfig};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn loader() -> ConfigLoader {
        ConfigLoader::load("./config/templates").unwrap()
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{ "pay_rate": "29.50" }"#;

        let request: ChargeRateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.pay_rate, dec("29.50"));
        assert!(request.apprentice_id.is_none());
        assert!(request.template.is_none());
        assert_eq!(request.cost, CostConfigOverrides::default());
        assert!(request.billable.is_none());
    }

    #[test]
    fn test_deserialize_request_with_overrides() {
        let json = r#"{
            "apprentice_id": "app_001",
            "pay_rate": 31.25,
            "template": "civil_outdoor",
            "cost": { "super_rate": "0.12" },
            "work": { "training_weeks": 6 },
            "billable": { "include_training_time": true },
            "margin": "0.2"
        }"#;

        let request: ChargeRateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.apprentice_id.as_deref(), Some("app_001"));
        assert_eq!(request.pay_rate, dec("31.25"));
        assert_eq!(request.cost.super_rate, Some(dec("0.12")));
        assert_eq!(request.work.training_weeks, Some(dec("6")));
        assert!(request.billable.unwrap().include_training_time);
        assert_eq!(request.margin, Some(dec("0.2")));
    }

    #[test]
    fn test_unknown_cost_field_is_rejected() {
        let json = r#"{ "pay_rate": "29.50", "cost": { "super": "0.12" } }"#;
        let result: Result<ChargeRateRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_without_template_uses_default_template() {
        let (code, input) = ChargeRateRequest::new(dec("29.50"))
            .resolve(&loader())
            .unwrap();

        assert_eq!(code, "standard");
        assert_eq!(input, ChargeRateInput::with_defaults(dec("29.50")));
    }

    #[test]
    fn test_resolve_layers_overrides_on_template() {
        let mut request = ChargeRateRequest::new(dec("29.50"));
        request.template = Some("civil_outdoor".to_string());
        request.cost.wc_rate = Some(dec("0.05"));
        request.margin = Some(dec("0.1"));

        let (code, input) = request.resolve(&loader()).unwrap();
        assert_eq!(code, "civil_outdoor");
        assert_eq!(input.cost.wc_rate, dec("0.05"));
        assert_eq!(input.cost.adverse_weather_days, 12);
        assert_eq!(input.work, WorkConfig::default());
        assert_eq!(input.effective_margin(), dec("0.1"));
    }

    #[test]
    fn test_resolve_billable_replaces_template_policy() {
        let mut request = ChargeRateRequest::new(dec("29.50"));
        request.template = Some("four_day_week".to_string());
        request.billable = Some(BillableOptions::default());

        let (_, input) = request.resolve(&loader()).unwrap();
        assert!(!input.billable.include_public_holidays);
        assert_eq!(input.work.days_per_week, dec("4"));
    }

    #[test]
    fn test_resolve_unknown_template_fails() {
        let mut request = ChargeRateRequest::new(dec("29.50"));
        request.template = Some("missing".to_string());

        assert_eq!(
            request.resolve(&loader()),
            Err(EngineError::TemplateNotFound {
                code: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_against_empty_loader_uses_factory_defaults() {
        let empty = ConfigLoader::from_templates(Vec::new());
        let (code, input) = ChargeRateRequest::new(dec("20")).resolve(&empty).unwrap();

        assert_eq!(code, "default");
        assert_eq!(input.cost, CostConfig::default());
    }

    #[test]
    fn test_deserialize_batch_request() {
        let json = r#"{
            "items": [
                { "apprentice_id": "a", "pay_rate": "25" },
                { "apprentice_id": "b", "pay_rate": "30", "template": "school_based" }
            ]
        }"#;

        let request: BatchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[1].template.as_deref(), Some("school_based"));
    }
}
