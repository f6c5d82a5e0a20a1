/// Access token loading
pub mod auth;
/// Market data resolver
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces and traits
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
