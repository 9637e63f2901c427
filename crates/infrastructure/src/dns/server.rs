//! UDP front end of the proxy.
//!
//! One shared socket receives client datagrams; each datagram is handled in
//! its own task so a slow upstream never blocks other clients.

use super::forwarding::{MessageBuilder, QueryParser};
use super::transport::MAX_UDP_RESPONSE_SIZE;
use geo_dns_cache_application::use_cases::ResolveQuestionsUseCase;
use geo_dns_cache_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

pub struct DnsProxyServer {
    socket: Arc<UdpSocket>,
    resolver: Arc<ResolveQuestionsUseCase>,
    shutdown: CancellationToken,
}

impl DnsProxyServer {
    pub async fn bind(
        bind_addr: SocketAddr,
        resolver: Arc<ResolveQuestionsUseCase>,
    ) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| {
            DomainError::IoError(format!("Failed to bind DNS socket to {}: {}", bind_addr, e))
        })?;

        Ok(Self {
            socket: Arc::new(socket),
            resolver,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    /// Receive loop. Returns once the cancellation token fires; in-flight
    /// datagram tasks finish on their own.
    pub async fn run(self) -> Result<(), DomainError> {
        info!(bind_address = %self.local_addr()?, protocol = "UDP", "DNS proxy listening");

        let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("DNS proxy shutting down");
                    break;
                }
                result = self.socket.recv_from(&mut buf) => {
                    match result {
                        Ok((len, peer)) => {
                            let datagram = buf[..len].to_vec();
                            let socket = Arc::clone(&self.socket);
                            let resolver = Arc::clone(&self.resolver);

                            tokio::spawn(async move {
                                handle_datagram(&socket, &resolver, &datagram, peer).await;
                            });
                        }
                        Err(e) => {
                            warn!(error = %e, "DNS proxy recv error");
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

async fn handle_datagram(
    socket: &UdpSocket,
    resolver: &ResolveQuestionsUseCase,
    datagram: &[u8],
    peer: SocketAddr,
) {
    let Err(e) = respond(socket, resolver, datagram, peer).await else {
        return;
    };

    match Failure::of(&e) {
        Failure::MalformedQuery => {
            debug!(client = %peer, reason = %e, "Discarding malformed datagram");
        }
        Failure::NoUpstream => {
            error!(client = %peer, "No upstream server available, query dropped");
        }
        Failure::Internal => {
            warn!(client = %peer, error = %e, "Query handling failed");
        }
    }
}

/// Who is to blame for a dropped datagram, which decides the log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    /// The client sent something that is not a DNS query
    MalformedQuery,
    NoUpstream,
    /// A valid query the proxy failed to answer
    Internal,
}

impl Failure {
    fn of(error: &DomainError) -> Self {
        match error {
            DomainError::InvalidDnsMessage(_) => Self::MalformedQuery,
            DomainError::NoUpstreamServers => Self::NoUpstream,
            _ => Self::Internal,
        }
    }
}

async fn respond(
    socket: &UdpSocket,
    resolver: &ResolveQuestionsUseCase,
    datagram: &[u8],
    peer: SocketAddr,
) -> Result<(), DomainError> {
    let request = QueryParser::parse(datagram)?;

    let resolution = resolver
        .execute(peer.ip().to_canonical(), &request.questions)
        .await?;

    let response = MessageBuilder::build_response(&request, &resolution.answers)?;

    socket
        .send_to(&response, peer)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to reply to {}: {}", peer, e)))?;

    debug!(
        client = %peer,
        id = request.id,
        questions = request.questions.len(),
        answers = resolution.answers.len(),
        cache_hits = resolution.cache_hits,
        upstream = %resolution.upstream.socket_addr(),
        "Query answered"
    );

    Ok(())
}
