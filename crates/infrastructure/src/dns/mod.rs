use addv_application::ports::DnsOracle;
use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::Resolver;
use std::net::{IpAddr, SocketAddr};
use tracing::debug;

/// Resolves A records through the configured upstream resolver list,
/// retrying a bounded number of times before giving up and reporting no
/// addresses. Result order preserves the resolver's answer order.
pub struct HickoryDnsOracle {
    resolver: Resolver<TokioConnectionProvider>,
    attempts: u32,
}

impl HickoryDnsOracle {
    /// `resolvers` is the fixed recursive resolver list from configuration
    /// (§6.5); an empty or entirely-unparseable list falls back to
    /// Cloudflare's public resolvers so the oracle is never left with no
    /// upstream at all.
    pub fn new(resolvers: &[String], attempts: u32) -> Self {
        let mut config = ResolverConfig::new();
        let mut added = 0;
        for raw in resolvers {
            if let Ok(ip) = raw.parse::<IpAddr>() {
                config.add_name_server(NameServerConfig::new(
                    SocketAddr::new(ip, 53),
                    Protocol::Udp,
                ));
                added += 1;
            }
        }
        if added == 0 {
            config = ResolverConfig::cloudflare();
        }

        let resolver =
            Resolver::builder_with_config(config, TokioConnectionProvider::default()).build();

        Self { resolver, attempts }
    }
}

#[async_trait]
impl DnsOracle for HickoryDnsOracle {
    async fn ips_of(&self, domain: &str) -> Vec<String> {
        for attempt in 0..self.attempts.max(1) {
            match self.resolver.ipv4_lookup(domain).await {
                Ok(response) => {
                    return response.iter().map(|a| a.0.to_string()).collect();
                }
                Err(e) => {
                    debug!(domain, attempt, error = %e, "A lookup failed");
                }
            }
        }
        Vec::new()
    }
}
