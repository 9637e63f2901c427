pub mod resolve_questions;

pub use resolve_questions::{ProxyResolution, ResolveQuestionsUseCase};
