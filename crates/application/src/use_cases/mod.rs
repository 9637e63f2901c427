pub mod cache;
pub mod proxy;
pub mod upstreams;

pub use cache::PurgeExpiredAnswersUseCase;
pub use proxy::{ProxyResolution, ResolveQuestionsUseCase};
pub use upstreams::{RegisterUpstreamsUseCase, SelectUpstreamUseCase};
