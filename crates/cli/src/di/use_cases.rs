use super::Repositories;
use geo_dns_cache_application::ports::GeoLocator;
use geo_dns_cache_application::use_cases::{
    PurgeExpiredAnswersUseCase, RegisterUpstreamsUseCase, ResolveQuestionsUseCase,
    SelectUpstreamUseCase,
};
use geo_dns_cache_domain::Config;
use geo_dns_cache_infrastructure::dns::UdpUpstreamResolver;
use std::sync::Arc;

pub struct UseCases {
    pub register_upstreams: Arc<RegisterUpstreamsUseCase>,
    pub resolve_questions: Arc<ResolveQuestionsUseCase>,
    pub purge_expired: Arc<PurgeExpiredAnswersUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, locator: Arc<dyn GeoLocator>, config: &Config) -> Self {
        let select_upstream = Arc::new(SelectUpstreamUseCase::new(
            repos.upstream_directory.clone(),
            locator.clone(),
        ));

        Self {
            register_upstreams: Arc::new(RegisterUpstreamsUseCase::new(
                repos.upstream_directory.clone(),
                locator,
            )),
            resolve_questions: Arc::new(ResolveQuestionsUseCase::new(
                select_upstream,
                repos.answer_cache.clone(),
                Arc::new(UdpUpstreamResolver::new(config.cache.upstream_timeout())),
            )),
            purge_expired: Arc::new(PurgeExpiredAnswersUseCase::new(repos.answer_cache.clone())),
        }
    }
}
