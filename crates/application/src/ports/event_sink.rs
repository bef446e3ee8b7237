use addv_domain::ValidationEvent;
use async_trait::async_trait;

/// Append-only event log. Implementations are best-effort: a write
/// failure must never propagate back to the request that triggered it.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn queued(&self, domain: &str, challenge: &str, ips: &[String]);
    async fn optout(&self, ip: &str);
    async fn joined(&self, ip: &str, key: &str, assigned: &[String]);
    async fn answered(&self, ip: &str, key: &str, domain: &str, answer: &str);
    async fn verdict(&self, event: &ValidationEvent);
}
