//! Domain layer containing the pure assessment and prediction logic.
//!
//! # Module Organization
//!
//! - `foundation` - Aspect taxonomy, ability vectors and validation errors
//! - `abilities` - Rule tables and the ability inference engine
//! - `prediction` - Tendency samples, posterior estimation and profession ranking

pub mod abilities;
pub mod foundation;
pub mod prediction;
