//! Charge-Rate Cost Engine for Australian apprentices
//!
//! This crate turns an apprentice's base pay rate plus cost, work-pattern and
//! billing-policy assumptions into a fully justified hourly charge rate, and
//! exposes the calculation over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
