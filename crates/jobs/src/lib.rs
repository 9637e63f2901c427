pub mod cache_retention;
pub mod runner;

pub use cache_retention::CacheRetentionJob;
pub use runner::JobRunner;
