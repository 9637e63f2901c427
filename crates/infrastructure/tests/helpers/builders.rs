#![allow(dead_code)]
use geo_dns_cache_application::ports::GeoLocator;
use geo_dns_cache_domain::config::DatabaseConfig;
use geo_dns_cache_domain::GeoPoint;
use geo_dns_cache_infrastructure::database::create_pool;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Fresh in-memory database with migrations applied
pub async fn memory_pool() -> SqlitePool {
    create_pool("sqlite::memory:", &DatabaseConfig::default())
        .await
        .unwrap()
}

pub async fn cached_rows(pool: &SqlitePool) -> i64 {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cached_answers")
        .fetch_one(pool)
        .await
        .unwrap();
    count.0
}

/// Client query with the given questions (class IN)
pub fn client_query(id: u16, questions: &[(&str, RecordType)]) -> Vec<u8> {
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    for (name, record_type) in questions {
        let mut query = Query::new();
        query.set_name(Name::from_str(name).unwrap());
        query.set_query_type(*record_type);
        query.set_query_class(DNSClass::IN);
        message.add_query(query);
    }
    message.to_bytes().unwrap()
}

pub fn a_addresses(message: &Message) -> Vec<Ipv4Addr> {
    message
        .answers()
        .iter()
        .filter_map(|r| match r.data() {
            RData::A(a) => Some(a.0),
            _ => None,
        })
        .collect()
}

/// Geolocation table for tests
pub struct TestGeoLocator {
    points: HashMap<IpAddr, GeoPoint>,
}

impl TestGeoLocator {
    pub fn new() -> Self {
        Self {
            points: HashMap::new(),
        }
    }

    pub fn with_point(mut self, ip: &str, longitude: f64, latitude: f64) -> Self {
        self.points
            .insert(ip.parse().unwrap(), GeoPoint::new(longitude, latitude));
        self
    }
}

impl GeoLocator for TestGeoLocator {
    fn locate(&self, ip: IpAddr) -> Option<GeoPoint> {
        self.points.get(&ip).copied()
    }
}
