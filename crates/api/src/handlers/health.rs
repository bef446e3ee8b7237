/// Ambient liveness probe, not part of the distilled ADDV protocol but
/// expected by this family's deployment tooling.
pub async fn health_check() -> &'static str {
    "OK\n"
}
