use geo_dns_cache_application::use_cases::ResolveQuestionsUseCase;
use geo_dns_cache_infrastructure::dns::DnsProxyServer;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn start_dns_server(
    bind_addr: String,
    resolver: Arc<ResolveQuestionsUseCase>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr = SocketAddr::from_str(&bind_addr)?;

    info!(bind_address = %socket_addr, "Starting DNS server");

    let server = DnsProxyServer::bind(socket_addr, resolver)
        .await?
        .with_cancellation(shutdown);

    info!("DNS server ready to accept queries");

    server.run().await?;

    Ok(())
}
