use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to encode DNS message: {0}")]
    MessageEncoding(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout after {timeout_ms}ms waiting for {server}")]
    QueryTimeout { server: String, timeout_ms: u64 },

    #[error("No upstream servers configured")]
    NoUpstreamServers,

    #[error("Location unavailable for upstream {0}")]
    UpstreamLocationUnavailable(String),
}
