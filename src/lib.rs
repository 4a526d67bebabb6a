//! Career Compass - Ability assessment and career recommendation
//!
//! Two independent pipelines share the ten-aspect ability taxonomy:
//! - a rule engine that turns profile facts (major, interests, MBTI letters,
//!   challenges) into a bounded ability report
//! - a Bayesian smoother that turns free text into tendency samples, damps
//!   them with a Metropolis-Hastings sampler and ranks a profession matrix

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
