//! Geo DNS Cache Domain Layer
pub mod cached_answer;
pub mod config;
pub mod dns_question;
pub mod errors;
pub mod geo_point;
pub mod upstream_server;

pub use cached_answer::{AnswerRecord, CachedAnswer, DEFAULT_ANSWER_RETENTION};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_question::DnsQuestion;
pub use errors::DomainError;
pub use geo_point::GeoPoint;
pub use upstream_server::UpstreamServer;
