use crate::errors::DomainError;
use ipnetwork::Ipv4Network;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Canonical string form of the /N IPv4 network enclosing a reporter's IP.
/// Used as the reporter's identity for diversity and deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubnetKey(String);

impl SubnetKey {
    /// Maps an IPv4 address string to its enclosing `/prefix_len` network.
    pub fn of(ip: &str, prefix_len: u8) -> Result<Self, DomainError> {
        let addr = Ipv4Addr::from_str(ip)
            .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;
        let network = Ipv4Network::new(addr, prefix_len)
            .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?
            .network();
        let cidr = Ipv4Network::new(network, prefix_len)
            .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;
        Ok(Self(cidr.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubnetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_to_slash_16_network() {
        let key = SubnetKey::of("10.0.0.5", 16).unwrap();
        assert_eq!(key.as_str(), "10.0.0.0/16");
    }

    #[test]
    fn same_subnet_for_any_host_in_range() {
        let a = SubnetKey::of("203.0.113.4", 16).unwrap();
        let b = SubnetKey::of("203.0.200.250", 16).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_malformed_ip() {
        assert!(SubnetKey::of("not-an-ip", 16).is_err());
    }
}
