#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock upstream answers.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// A records per queried name (lowercase, no trailing dot); unknown
    /// names get an empty answer section
    Answer(HashMap<String, Vec<Ipv4Addr>>),
    /// Never reply
    Silent,
    /// Reply with bytes that are not a DNS message
    Garbage,
}

impl MockBehavior {
    pub fn single(name: &str, ip: Ipv4Addr) -> Self {
        let mut answers = HashMap::new();
        answers.insert(name.to_string(), vec![ip]);
        Self::Answer(answers)
    }
}

/// Mock upstream DNS server
///
/// Answers A queries from a fixed table, building the wire response by hand
/// so it does not depend on the codec under test.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicU64>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicU64::new(0));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let counter = Arc::clone(&queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            let response = match &behavior {
                                MockBehavior::Answer(table) => Self::build_mock_response(&buf[..len], table),
                                MockBehavior::Silent => continue,
                                MockBehavior::Garbage => vec![0xde, 0xad, 0xbe, 0xef],
                            };
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of datagrams received so far
    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::SeqCst)
    }

    /// Reads the first question name straight from the wire bytes.
    fn question_name(query: &[u8]) -> Option<String> {
        let mut labels = Vec::new();
        let mut pos = 12;
        loop {
            let len = *query.get(pos)? as usize;
            if len == 0 {
                break;
            }
            let label = query.get(pos + 1..pos + 1 + len)?;
            labels.push(String::from_utf8_lossy(label).to_ascii_lowercase());
            pos += 1 + len;
        }
        Some(labels.join("."))
    }

    fn build_mock_response(query: &[u8], table: &HashMap<String, Vec<Ipv4Addr>>) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let addresses = Self::question_name(query)
            .and_then(|name| table.get(&name).cloned())
            .unwrap_or_default();

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]); // Transaction ID
        response.push(0x81); // QR=1, Opcode=0, AA=0, TC=0, RD=1
        response.push(0x80); // RA=1, Z=0, RCODE=0
        response.extend_from_slice(&query[4..6]); // Questions count
        response.extend_from_slice(&(addresses.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]); // Authority RRs
        response.extend_from_slice(&[0x00, 0x00]); // Additional RRs

        // Question section
        response.extend_from_slice(&query[12..]);

        for ip in addresses {
            response.extend_from_slice(&[
                0xc0, 0x0c, // Name pointer to question
                0x00, 0x01, // Type A
                0x00, 0x01, // Class IN
                0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
                0x00, 0x04, // Data length: 4 bytes
            ]);
            response.extend_from_slice(&ip.octets());
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
