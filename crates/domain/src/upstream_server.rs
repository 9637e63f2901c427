use crate::GeoPoint;
use std::cmp::Ordering;
use std::net::{IpAddr, SocketAddr};

/// A configured upstream resolver.
///
/// `rank` is the position of the server in the configuration file and is
/// the fallback ordering when the client cannot be geolocated.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamServer {
    pub address: IpAddr,
    pub port: u16,
    pub location: GeoPoint,
    pub rank: i64,
}

impl UpstreamServer {
    pub fn new(address: IpAddr, port: u16, location: GeoPoint, rank: i64) -> Self {
        Self {
            address,
            port,
            location,
            rank,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    /// Picks the server closest to `point`, or the lowest rank when no point
    /// is given. Distance ties go to the lowest rank.
    pub fn select_nearest<'a, I>(servers: I, point: Option<&GeoPoint>) -> Option<&'a UpstreamServer>
    where
        I: IntoIterator<Item = &'a UpstreamServer>,
    {
        match point {
            Some(point) => servers
                .into_iter()
                .map(|s| (s.location.distance_km(point), s))
                .min_by(|(da, a), (db, b)| {
                    da.partial_cmp(db)
                        .unwrap_or(Ordering::Equal)
                        .then(a.rank.cmp(&b.rank))
                })
                .map(|(_, s)| s),
            None => servers.into_iter().min_by_key(|s| s.rank),
        }
    }
}
