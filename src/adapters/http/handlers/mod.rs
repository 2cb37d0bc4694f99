pub mod bills;
pub mod houses;

/// Liveness probe
/// GET /health
pub async fn health_handler() -> &'static str {
  "OK"
}
