pub mod answer_cache;
pub mod geo_locator;
pub mod upstream_directory;
pub mod upstream_resolver;

pub use answer_cache::AnswerCache;
pub use geo_locator::GeoLocator;
pub use upstream_directory::UpstreamDirectory;
pub use upstream_resolver::UpstreamResolver;
