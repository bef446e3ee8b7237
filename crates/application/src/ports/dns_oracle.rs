use async_trait::async_trait;

/// Resolves a domain to its A-record IP strings. Bounded retries and
/// swallowed failures are the implementor's responsibility — this port
/// always returns (an empty `Vec` on persistent failure, never an error).
#[async_trait]
pub trait DnsOracle: Send + Sync {
    async fn ips_of(&self, domain: &str) -> Vec<String>;
}
