//! Strassen-rs library: application logic for the demo driver.

pub mod app;
pub mod config;
pub mod errors;
pub mod input;
