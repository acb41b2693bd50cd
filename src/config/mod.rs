//! Rate template loading and management for the Charge-Rate Cost Engine.
//!
//! This module loads named rate templates (stored cost, work-pattern and
//! billing assumptions) from YAML files. Template fields that are absent
//! take the factory defaults, so defaults are applied once, at load time.
//!
//! # Example
//!
//! ```no_run
//! use charge_rate_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/templates").unwrap();
//! for summary in config.summaries() {
//!     println!("{}: {}", summary.code, summary.name);
//! }
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_TEMPLATE_CODE, RateTemplate, TemplateFile, TemplateSummary};
