pub mod message_builder;
pub mod query_parser;
pub mod record_codec;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use query_parser::{InboundQuery, QueryParser};
pub use record_codec::RecordCodec;
pub use response_parser::{ResponseParser, UpstreamReply};
