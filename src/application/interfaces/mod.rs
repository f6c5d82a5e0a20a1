/// Upstream API abstraction
pub mod api;
/// Provider-facing market data interface
pub mod market;
