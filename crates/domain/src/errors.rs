use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
