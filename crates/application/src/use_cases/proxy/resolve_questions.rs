use crate::ports::{AnswerCache, UpstreamResolver};
use crate::use_cases::SelectUpstreamUseCase;
use geo_dns_cache_domain::{AnswerRecord, DnsQuestion, DomainError, UpstreamServer};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of resolving every question of one client query.
#[derive(Debug, Clone)]
pub struct ProxyResolution {
    /// Answers of all questions, concatenated in question order
    pub answers: Vec<AnswerRecord>,
    /// Upstream chosen for the whole query
    pub upstream: UpstreamServer,
    pub cache_hits: usize,
    pub upstream_queries: usize,
}

/// Use case: answer the questions of one inbound query.
///
/// The upstream is selected once and reused for every question. Questions
/// are resolved strictly one after another: cache first, then a round trip
/// to the upstream whose non-empty answers are written back to the cache.
/// An upstream failure (timeout, unreadable reply) only empties that
/// question's answers.
pub struct ResolveQuestionsUseCase {
    selector: Arc<SelectUpstreamUseCase>,
    cache: Arc<dyn AnswerCache>,
    upstream: Arc<dyn UpstreamResolver>,
}

impl ResolveQuestionsUseCase {
    pub fn new(
        selector: Arc<SelectUpstreamUseCase>,
        cache: Arc<dyn AnswerCache>,
        upstream: Arc<dyn UpstreamResolver>,
    ) -> Self {
        Self {
            selector,
            cache,
            upstream,
        }
    }

    pub async fn execute(
        &self,
        client: IpAddr,
        questions: &[DnsQuestion],
    ) -> Result<ProxyResolution, DomainError> {
        let upstream = self.selector.execute(client).await?;

        let mut answers = Vec::new();
        let mut cache_hits = 0;
        let mut upstream_queries = 0;

        for question in questions {
            let cached = self.cached_answers(question).await;
            if !cached.is_empty() {
                debug!(question = %question, answers = cached.len(), "Cache hit");
                cache_hits += 1;
                answers.extend(cached);
                continue;
            }

            upstream_queries += 1;
            answers.extend(self.forward(&upstream, question).await);
        }

        Ok(ProxyResolution {
            answers,
            upstream,
            cache_hits,
            upstream_queries,
        })
    }

    async fn cached_answers(&self, question: &DnsQuestion) -> Vec<AnswerRecord> {
        match self.cache.lookup(question).await {
            Ok(answers) => answers,
            Err(e) => {
                warn!(question = %question, error = %e, "Cache lookup failed, treating as miss");
                Vec::new()
            }
        }
    }

    async fn forward(&self, upstream: &UpstreamServer, question: &DnsQuestion) -> Vec<AnswerRecord> {
        let answers = match self.upstream.resolve(upstream, question).await {
            Ok(answers) => answers,
            Err(e) => {
                warn!(
                    question = %question,
                    upstream = %upstream.socket_addr(),
                    error = %e,
                    "Upstream query failed"
                );
                return Vec::new();
            }
        };

        if answers.is_empty() {
            debug!(question = %question, "Upstream returned no answers");
            return answers;
        }

        if let Err(e) = self.cache.store(question, &answers).await {
            warn!(question = %question, error = %e, "Failed to cache upstream answers");
        }

        debug!(
            question = %question,
            upstream = %upstream.socket_addr(),
            answers = answers.len(),
            "Answers fetched from upstream"
        );

        answers
    }
}
