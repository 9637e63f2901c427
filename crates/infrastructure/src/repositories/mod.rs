pub mod answer_cache_repository;
pub mod upstream_directory_repository;

pub use answer_cache_repository::SqliteAnswerCache;
pub use upstream_directory_repository::SqliteUpstreamDirectory;
