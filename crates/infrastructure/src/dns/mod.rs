pub mod forwarding;
pub mod server;
pub mod transport;
pub mod upstream_resolver;

pub use server::DnsProxyServer;
pub use upstream_resolver::UdpUpstreamResolver;
