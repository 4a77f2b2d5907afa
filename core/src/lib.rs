//! Shift assignment and swap-partner engine.
//!
//! The host application hands over plain collections (employees, open
//! shifts, existing assignments, vacation requests) and gets back new
//! assignments or a swap decision. Nothing in this crate performs I/O
//! except `EngineConfig::load`.

pub mod availability;
pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod model;
pub mod planner;
pub mod preferences;
pub mod rng;
pub mod scenario;
pub mod scoring;
pub mod swap;
pub mod types;
pub mod validate;
pub mod workload;
