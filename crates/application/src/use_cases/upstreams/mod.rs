pub mod register;
pub mod select;

pub use register::RegisterUpstreamsUseCase;
pub use select::SelectUpstreamUseCase;
