// clippy lint unwrap
#![warn(clippy::unwrap_used)]
#![warn(clippy::pedantic)]
// ban unsafe
#![forbid(unsafe_code)]

pub mod cache;
pub mod cli;
pub mod client;
pub mod configuration;
pub mod controller;
pub mod error;
pub mod model;
pub mod notify;
pub mod telemetry;
pub mod tests;
