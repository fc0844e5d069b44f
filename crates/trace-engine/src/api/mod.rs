pub mod config;
pub mod narrator;
pub mod tracer;
pub mod types;
